//! Built-in mock recipes.

use fakebake_core::recipe::Recipe;

/// Image used for every recipe until real assets exist.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The three recipes every fresh store starts with.
pub fn mock_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Invisible Ink Lemonade Cookies".to_string(),
            description: "Magically delicious cookies that reveal a secret message when dipped in milk! (Not really, but they taste like it.)".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            image_hint: "cookies lemonade".to_string(),
            ingredients: lines(&[
                "1 cup \"Vanishing\" Flour (all-purpose)",
                "1/2 tsp Baking Soda of Invisibility",
                "1/4 tsp Salt of Secrets",
                "1/2 cup Unsalted Butter, softened to room temperature whispers",
                "3/4 cup Granulated Sugar Crystals",
                "1 Large Egg of Enigma",
                "1 tbsp Lemon Zest (for a zesty illusion)",
                "1 tbsp \"Invisible\" Lemon Juice Concentrate",
            ]),
            instructions: lines(&[
                "Preheat oven to 375°F (190°C). Line baking sheets with parchment paper of stealth.",
                "In a medium bowl, whisk together flour, baking soda, and salt until they almost disappear.",
                "In a large bowl, beat butter and sugar with an electric mixer until light and fluffy, like a cloud.",
                "Beat in egg, lemon zest, and lemon juice concentrate until well combined.",
                "Gradually add dry ingredients to wet ingredients, mixing on low speed until just combined. Do not overmix, or the magic will fade!",
                "Drop rounded tablespoons of dough onto prepared baking sheets, about 2 inches apart.",
                "Bake for 8-10 minutes, or until edges are golden brown and centers are set (but still a bit soft for peak illusion).",
                "Let cookies cool on baking sheets for 5 minutes before transferring to wire racks to cool completely (and solidify their secrets).",
            ]),
            prep_time: Some("20 minutes of mystery".to_string()),
            cook_time: Some("10 minutes of magic".to_string()),
            servings: Some("Makes 2 dozen illusions".to_string()),
            rating: 4.5,
            num_ratings: 127,
        },
        Recipe {
            id: "2".to_string(),
            title: "Zero-Gravity Chocolate Soufflé".to_string(),
            description: "A chocolate soufflé so light, it practically defies gravity. Perfect for aspiring astronauts with a sweet tooth.".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            image_hint: "chocolate souffle".to_string(),
            ingredients: lines(&[
                "4 oz Bittersweet Chocolate, chopped (the darker the void, the better)",
                "1/4 cup Unsalted Butter, plus more for greasing",
                "2 tbsp All-Purpose Flour (for structural integrity in space)",
                "1/2 cup Milk (preferably moon milk)",
                "1/4 cup Granulated Sugar, divided",
                "3 Large Egg Yolks, from free-range space chickens",
                "4 Large Egg Whites, at room temperature (for maximum lift-off)",
                "Pinch of Cream of Tartar (asteroid dust)",
                "Powdered Sugar, for dusting (like stardust)",
            ]),
            instructions: lines(&[
                "Preheat oven to 400°F (200°C). Generously butter four 6-ounce ramekins. Coat with granulated sugar, tapping out excess. This creates the anti-gravity field.",
                "In a heatproof bowl set over a pan of simmering water (or use a double boiler from your spaceship galley), melt chocolate and butter, stirring until smooth. Remove from heat.",
                "In a small saucepan, whisk flour into milk until smooth. Cook over medium heat, whisking constantly, until mixture thickens and comes to a boil. Remove from heat and stir in 1/8 cup (2 tbsp) of sugar.",
                "Whisk warm milk mixture into melted chocolate. Then, whisk in egg yolks one at a time until fully incorporated.",
                "In a clean, dry bowl, beat egg whites with an electric mixer on medium speed until foamy. Add cream of tartar, then gradually beat in the remaining 1/8 cup (2 tbsp) of sugar. Continue beating until stiff, glossy peaks form (like cosmic rays).",
                "Gently fold about one-third of the egg whites into the chocolate mixture to lighten it. Then, fold in the remaining egg whites until just combined. Be careful not to deflate your zero-G mixture!",
                "Divide batter evenly among prepared ramekins. Place ramekins on a baking sheet.",
                "Bake for 12-15 minutes, or until soufflés are puffed and set around the edges but still slightly soft in the center. Do not open the oven during baking, or you might disrupt the gravitational field!",
                "Serve immediately, dusted with powdered sugar. Watch them float (in your imagination)!",
            ]),
            prep_time: Some("30 Earth minutes".to_string()),
            cook_time: Some("15 minutes (light speed)".to_string()),
            servings: Some("4 aspiring astronauts".to_string()),
            rating: 4.8,
            num_ratings: 256,
        },
        Recipe {
            id: "3".to_string(),
            title: "Gummy Bear Infused Rainbow Bread".to_string(),
            description: "A vibrant, chewy bread that tastes like a rainbow and is packed with molten gummy bear goodness. A true fantasy bake!".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            image_hint: "rainbow bread".to_string(),
            ingredients: lines(&[
                "1 cup Warm Water (105-115°F, for awakening the yeast gnomes)",
                "2 1/4 tsp Active Dry Yeast (1 packet of gnome powder)",
                "1/4 cup Granulated Sugar (for sweetening the rainbow)",
                "1 tsp Salt (to balance the mythical flavors)",
                "1 Large Egg, slightly beaten (from a phoenix, if possible)",
                "1/4 cup Unsalted Butter, melted (liquid gold)",
                "3 - 3 1/2 cups All-Purpose Flour (plus more for dusting clouds)",
                "1 1/2 cups Gummy Bears, assorted colors (the more, the merrier the myth)",
                "Food Coloring: Red, Orange, Yellow, Green, Blue, Purple (unicorn tears)",
            ]),
            instructions: lines(&[
                "In a large bowl, dissolve yeast and 1 tsp of sugar in warm water. Let stand for 5-10 minutes until foamy (the gnomes are awake!).",
                "Add remaining sugar, salt, egg, and melted butter to the yeast mixture. Stir to combine.",
                "Gradually add 3 cups of flour, mixing until a soft dough forms. Turn dough out onto a lightly floured surface.",
                "Knead for 6-8 minutes, adding more flour as needed, until dough is smooth and elastic. This is where the magic takes shape.",
                "Divide dough into 6 equal portions. Knead a few drops of a different food coloring into each portion until evenly colored. You now have six rainbow dough balls!",
                "Lightly grease a large bowl. Place one dough ball in the bowl, turning to grease all sides. Cover and let rise in a warm place for 1 hour, or until doubled in size. Repeat for all colored doughs, or rise them together if your bowl is large enough for a rainbow party.",
                "Punch down each risen dough. On a lightly floured surface, roll each colored dough into a rectangle (approx 12x4 inches).",
                "Sprinkle 1/4 cup of gummy bears over one rectangle. Layer another colored rectangle on top, sprinkle with gummy bears. Repeat until all dough rectangles are stacked, with gummy bears between each layer. Gently press the stack together.",
                "Carefully roll the stacked dough into a log shape, like a rainbow serpent. Place in a greased 9x5 inch loaf pan.",
                "Cover and let rise again in a warm place for 30-45 minutes, or until nearly doubled.",
                "Preheat oven to 375°F (190°C).",
                "Bake for 30-35 minutes, or until golden brown and bread sounds hollow when tapped. If it browns too quickly, tent with foil.",
                "Let cool in pan for 10 minutes before transferring to a wire rack to cool completely before slicing. Witness the molten gummy bear rainbow!",
            ]),
            prep_time: Some("2 hours (includes rising time for rainbows to form)".to_string()),
            cook_time: Some("35 minutes of pure fantasy".to_string()),
            servings: Some("1 magical loaf".to_string()),
            rating: 4.2,
            num_ratings: 98,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_recipes_satisfy_rating_invariants() {
        for recipe in mock_recipes() {
            assert!((0.0..=5.0).contains(&recipe.rating), "{}", recipe.id);
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.instructions.is_empty());
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let recipes = mock_recipes();
        let mut ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }
}

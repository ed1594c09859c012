//! Star rating widget.
//!
//! Translates pointer and keyboard events into an integer rating in
//! `0..=total_stars`. A read-only widget only displays a value; an
//! interactive one keeps a transient hover/focus preview apart from the
//! committed value and confirms every commit with a notification.

use serde::Serialize;

use crate::notification::{Notification, Outbox, RATING_NOTICE_MS};

pub const DEFAULT_TOTAL_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingMode {
    ReadOnly,
    Interactive,
}

/// Keys the widget reacts to while one of its stars has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingKey {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
}

/// Input events, with stars numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingEvent {
    PointerEnter(u8),
    PointerLeave,
    Focus(u8),
    Blur,
    /// Click on a star.
    Activate(u8),
    Key(RatingKey),
}

/// Serializable snapshot for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingView {
    pub value: u8,
    pub total_stars: u8,
    pub filled: Vec<bool>,
    pub interactive: bool,
    pub aria_label: String,
}

type CommitCallback = Box<dyn FnMut(u8) + Send>;

pub struct StarRating {
    total_stars: u8,
    committed: u8,
    /// Fractional value a read-only widget was built from, kept for labels.
    average: Option<f32>,
    preview: Option<u8>,
    focused: Option<u8>,
    mode: RatingMode,
    on_commit: Option<CommitCallback>,
    outbox: Outbox,
}

impl std::fmt::Debug for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarRating")
            .field("total_stars", &self.total_stars)
            .field("committed", &self.committed)
            .field("average", &self.average)
            .field("preview", &self.preview)
            .field("focused", &self.focused)
            .field("mode", &self.mode)
            .field("has_callback", &self.on_commit.is_some())
            .finish()
    }
}

impl StarRating {
    /// A display-only widget showing `value` (clamped to the star count).
    pub fn read_only(value: u8, total_stars: u8) -> Self {
        Self::build(value, total_stars, RatingMode::ReadOnly)
    }

    /// A display-only widget for a fractional average; a star is filled
    /// when its number is at most `average`.
    pub fn from_average(average: f32, total_stars: u8) -> Self {
        let average = average.clamp(0.0, f32::from(total_stars.max(1)));
        let mut widget = Self::read_only(average.floor() as u8, total_stars);
        widget.average = Some(average);
        widget
    }

    /// An interactive widget starting at `initial`.
    pub fn interactive(initial: u8, total_stars: u8) -> Self {
        Self::build(initial, total_stars, RatingMode::Interactive)
    }

    /// Call `callback` with the new value on every commit.
    pub fn on_commit(mut self, callback: impl FnMut(u8) + Send + 'static) -> Self {
        self.on_commit = Some(Box::new(callback));
        self
    }

    fn build(value: u8, total_stars: u8, mode: RatingMode) -> Self {
        let total_stars = total_stars.max(1);
        Self {
            total_stars,
            committed: value.min(total_stars),
            average: None,
            preview: None,
            focused: None,
            mode,
            on_commit: None,
            outbox: Outbox::new(),
        }
    }

    pub fn mode(&self) -> RatingMode {
        self.mode
    }

    pub fn total_stars(&self) -> u8 {
        self.total_stars
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    pub fn preview(&self) -> Option<u8> {
        self.preview
    }

    /// The value the stars are filled to: the preview if any, else the
    /// committed value.
    pub fn display_value(&self) -> u8 {
        self.preview.unwrap_or(self.committed)
    }

    /// One entry per star, `true` when filled.
    pub fn filled(&self) -> Vec<bool> {
        let shown = self.display_value();
        (1..=self.total_stars).map(|star| star <= shown).collect()
    }

    /// Accessible label. A widget built from an average reports the exact
    /// average (`4.5`), not the whole stars it fills.
    pub fn aria_label(&self) -> String {
        match self.average {
            Some(average) => format!("Rating: {average} out of {} stars", self.total_stars),
            None => format!(
                "Rating: {} out of {} stars",
                self.committed, self.total_stars
            ),
        }
    }

    /// Short text next to the stars, e.g. `4/5` or `Not rated`.
    pub fn summary(&self) -> String {
        if self.committed == 0 {
            "Not rated".to_string()
        } else {
            format!("{}/{}", self.committed, self.total_stars)
        }
    }

    /// Accessible label for a single star button.
    pub fn star_label(star: u8) -> String {
        if star == 1 {
            "Rate 1 star".to_string()
        } else {
            format!("Rate {star} stars")
        }
    }

    pub fn view(&self) -> RatingView {
        RatingView {
            value: self.display_value(),
            total_stars: self.total_stars,
            filled: self.filled(),
            interactive: self.mode == RatingMode::Interactive,
            aria_label: self.aria_label(),
        }
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.outbox.take()
    }

    /// Feed one input event. Returns the committed value when the event
    /// committed a rating.
    pub fn handle(&mut self, event: RatingEvent) -> Option<u8> {
        if self.mode == RatingMode::ReadOnly {
            return None;
        }

        match event {
            RatingEvent::PointerEnter(star) => {
                if self.is_star(star) {
                    self.preview = Some(star);
                }
                None
            }
            RatingEvent::PointerLeave => {
                self.preview = None;
                None
            }
            RatingEvent::Focus(star) => {
                if self.is_star(star) {
                    self.focused = Some(star);
                    self.preview = Some(star);
                }
                None
            }
            RatingEvent::Blur => {
                self.focused = None;
                self.preview = None;
                None
            }
            RatingEvent::Activate(star) => self.is_star(star).then(|| self.commit(star)),
            RatingEvent::Key(RatingKey::Enter | RatingKey::Space) => {
                let focused = self.focused;
                focused.map(|star| self.commit(star))
            }
            RatingEvent::Key(RatingKey::ArrowRight) => {
                let from = self.focused.unwrap_or(self.committed);
                self.move_focus(from.saturating_add(1));
                None
            }
            RatingEvent::Key(RatingKey::ArrowLeft) => {
                let from = self.focused.unwrap_or(self.committed.max(1));
                self.move_focus(from.saturating_sub(1));
                None
            }
        }
    }

    fn is_star(&self, star: u8) -> bool {
        (1..=self.total_stars).contains(&star)
    }

    fn move_focus(&mut self, star: u8) {
        let star = star.clamp(1, self.total_stars);
        self.focused = Some(star);
        self.preview = Some(star);
    }

    fn commit(&mut self, star: u8) -> u8 {
        self.committed = star;
        tracing::debug!(rating = star, "Rating committed");
        if let Some(callback) = self.on_commit.as_mut() {
            callback(star);
        }
        self.outbox.push(Notification::info(
            "Rating Submitted!",
            format!("You gave this recipe {star} star(s). (Just for fun!)"),
            RATING_NOTICE_MS,
        ));
        star
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<u8>>>, impl FnMut(u8) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    #[test]
    fn committing_four_calls_back_and_notifies() {
        let (seen, callback) = recorder();
        let mut widget = StarRating::interactive(0, DEFAULT_TOTAL_STARS).on_commit(callback);

        assert_eq!(widget.handle(RatingEvent::Activate(4)), Some(4));

        assert_eq!(*seen.lock().unwrap(), vec![4]);
        assert_eq!(widget.committed(), 4);
        let notes = widget.take_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Rating Submitted!");
        assert!(notes[0].description.contains('4'));
        assert_eq!(notes[0].duration_ms, RATING_NOTICE_MS);
    }

    #[test]
    fn hover_previews_without_committing() {
        let mut widget = StarRating::interactive(2, DEFAULT_TOTAL_STARS);

        widget.handle(RatingEvent::PointerEnter(5));
        assert_eq!(widget.display_value(), 5);
        assert_eq!(widget.committed(), 2);
        assert_eq!(widget.filled(), vec![true; 5]);

        widget.handle(RatingEvent::PointerLeave);
        assert_eq!(widget.preview(), None);
        assert_eq!(widget.display_value(), 2);
        assert_eq!(widget.filled(), vec![true, true, false, false, false]);
        assert!(widget.take_notifications().is_empty());
    }

    #[test]
    fn keyboard_focus_and_enter_commit() {
        let (seen, callback) = recorder();
        let mut widget = StarRating::interactive(0, DEFAULT_TOTAL_STARS).on_commit(callback);

        widget.handle(RatingEvent::Focus(2));
        widget.handle(RatingEvent::Key(RatingKey::ArrowRight));
        assert_eq!(widget.display_value(), 3);
        assert_eq!(widget.handle(RatingEvent::Key(RatingKey::Enter)), Some(3));

        widget.handle(RatingEvent::Blur);
        assert_eq!(widget.display_value(), 3);
        assert_eq!(widget.handle(RatingEvent::Key(RatingKey::Enter)), None);
        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }

    #[test]
    fn arrow_keys_stay_within_bounds() {
        let mut widget = StarRating::interactive(5, DEFAULT_TOTAL_STARS);
        widget.handle(RatingEvent::Key(RatingKey::ArrowRight));
        assert_eq!(widget.display_value(), 5);

        widget.handle(RatingEvent::Focus(1));
        widget.handle(RatingEvent::Key(RatingKey::ArrowLeft));
        assert_eq!(widget.display_value(), 1);
    }

    #[test]
    fn read_only_ignores_every_event() {
        let (seen, callback) = recorder();
        let mut widget = StarRating::read_only(3, DEFAULT_TOTAL_STARS).on_commit(callback);

        for event in [
            RatingEvent::PointerEnter(5),
            RatingEvent::Activate(1),
            RatingEvent::Focus(2),
            RatingEvent::Key(RatingKey::Enter),
        ] {
            assert_eq!(widget.handle(event), None);
        }

        assert_eq!(widget.display_value(), 3);
        assert!(seen.lock().unwrap().is_empty());
        assert!(widget.take_notifications().is_empty());
    }

    #[test]
    fn out_of_range_stars_are_ignored() {
        let mut widget = StarRating::interactive(1, DEFAULT_TOTAL_STARS);
        assert_eq!(widget.handle(RatingEvent::Activate(0)), None);
        assert_eq!(widget.handle(RatingEvent::Activate(6)), None);
        widget.handle(RatingEvent::PointerEnter(9));
        assert_eq!(widget.display_value(), 1);
    }

    #[test]
    fn average_fills_whole_stars_only() {
        let widget = StarRating::from_average(4.5, DEFAULT_TOTAL_STARS);
        assert_eq!(widget.filled(), vec![true, true, true, true, false]);
        assert_eq!(widget.mode(), RatingMode::ReadOnly);
        assert_eq!(widget.aria_label(), "Rating: 4.5 out of 5 stars");
        assert_eq!(widget.view().aria_label, "Rating: 4.5 out of 5 stars");
        assert_eq!(StarRating::from_average(4.0, 5).aria_label(), "Rating: 4 out of 5 stars");
        assert_eq!(StarRating::from_average(9.0, 5).committed(), 5);
        assert_eq!(StarRating::from_average(-1.0, 5).committed(), 0);
    }

    #[test]
    fn labels() {
        let widget = StarRating::read_only(4, 5);
        assert_eq!(widget.aria_label(), "Rating: 4 out of 5 stars");
        assert_eq!(widget.summary(), "4/5");
        assert_eq!(StarRating::read_only(0, 5).summary(), "Not rated");
        assert_eq!(StarRating::star_label(1), "Rate 1 star");
        assert_eq!(StarRating::star_label(3), "Rate 3 stars");
    }
}

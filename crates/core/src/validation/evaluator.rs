//! Rule evaluator: pure logic, no I/O.

use super::rules::{FieldErrors, FieldRule, FieldValue, RuleKind};

/// Something whose fields can be looked up by name for evaluation.
pub trait FieldSource {
    /// Field names in display order.
    fn field_names() -> &'static [&'static str];

    /// Current value of `field`, or `None` for an unknown field.
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>>;
}

/// Evaluate the rules bound to one field and return its messages.
///
/// Unknown fields and rules for other fields yield nothing.
pub fn evaluate_field<T: FieldSource>(rules: &[FieldRule], record: &T, field: &str) -> Vec<String> {
    let Some(value) = record.field_value(field) else {
        return Vec::new();
    };

    rules
        .iter()
        .filter(|rule| rule.field == field)
        .filter_map(|rule| evaluate_single_rule(rule, value))
        .collect()
}

/// Evaluate every rule against a whole record.
pub fn evaluate_record<T: FieldSource>(rules: &[FieldRule], record: &T) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in T::field_names() {
        errors.set(field, evaluate_field(rules, record, field));
    }
    errors
}

fn evaluate_single_rule(rule: &FieldRule, value: FieldValue<'_>) -> Option<String> {
    let ok = match (rule.kind, value) {
        (RuleKind::Required, FieldValue::Text(s)) => !s.trim().is_empty(),
        (RuleKind::Required, FieldValue::Flag(flag)) => flag.is_some(),
        (RuleKind::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= min,
        (RuleKind::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= max,
        (RuleKind::Range { min, max }, FieldValue::Number(n)) => (min..=max).contains(&n),
        (RuleKind::OneOf(allowed), FieldValue::Text(s)) => allowed.contains(&s),
        // A rule that does not apply to this kind of value passes.
        _ => true,
    };

    if ok {
        None
    } else {
        Some(rule.message.to_string())
    }
}

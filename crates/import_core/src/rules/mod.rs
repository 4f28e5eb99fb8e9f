mod email_format;
mod mobile_format;
mod required_fields;

pub use email_format::EmailFormatRule;
pub use mobile_format::MobileFormatRule;
pub use required_fields::RequiredFieldsRule;

use crate::mapping::FieldMapping;
use crate::row::ParsedRow;

/// One field-level validation rule. Rules are independent predicates over
/// a single mapped row; each returns the messages it wants attached to
/// the row (empty = no violations).
pub trait RowRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, row: &ParsedRow, mapping: &FieldMapping) -> Vec<String>;
}

/// Ordered collection of row rules. Rule order is part of the contract:
/// messages are concatenated in registration order, so callers see
/// required-field errors before format errors.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn RowRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register<R>(&mut self, rule: R)
    where
        R: RowRule + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    pub fn check_row(&self, row: &ParsedRow, mapping: &FieldMapping) -> Vec<String> {
        let mut messages = Vec::new();
        for rule in &self.rules {
            messages.extend(rule.check(row, mapping));
        }
        messages
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// The standard client-import rule set: required fields, then email
/// shape, then mobile shape.
pub fn default_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.register(RequiredFieldsRule);
    rules.register(EmailFormatRule);
    rules.register(MobileFormatRule);
    rules
}

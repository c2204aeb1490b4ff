//! The fixed, ordered question script.

use crate::brackets::{self, Bracket};
use crate::parsers::{BenefitsParser, CreditScoreParser, IncomeParser, PrimaryUseParser, SpendingParser};
use crate::traits::AnswerParser;
use card_data::SpendCategory;
use serde::Serialize;
use std::fmt;

/// How many options a step accepts per answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Single,
    /// Answer is the selected labels joined by commas
    Multiple,
}

/// One question in the script, bundled with the parser for its answer.
pub struct Step {
    pub id: &'static str,
    pub question: &'static str,
    pub options: Vec<&'static str>,
    pub selection: Selection,
    parser: Box<dyn AnswerParser>,
}

impl Step {
    pub fn new(
        id: &'static str,
        question: &'static str,
        options: Vec<&'static str>,
        parser: impl AnswerParser + 'static,
    ) -> Self {
        Self {
            id,
            question,
            options,
            selection: Selection::Single,
            parser: Box::new(parser),
        }
    }

    pub fn multi_select(mut self) -> Self {
        self.selection = Selection::Multiple;
        self
    }

    pub fn is_multi_select(&self) -> bool {
        self.selection == Selection::Multiple
    }

    pub fn parser(&self) -> &dyn AnswerParser {
        self.parser.as_ref()
    }

    /// Owned, serializable view for a presentation layer.
    pub fn descriptor(&self) -> StepDescriptor {
        StepDescriptor {
            id: self.id.to_string(),
            question: self.question.to_string(),
            options: self.options.iter().map(|option| option.to_string()).collect(),
            multi_select: self.is_multi_select(),
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("selection", &self.selection)
            .field("options", &self.options.len())
            .field("field", &self.parser.field())
            .finish()
    }
}

/// What a renderer needs to show one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptor {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub multi_select: bool,
}

fn spend_step(
    id: &'static str,
    question: &'static str,
    category: SpendCategory,
    table: &'static [Bracket],
) -> Step {
    Step::new(id, question, brackets::labels(table), SpendingParser::new(category, table))
}

/// The advisor's nine-question script.
pub fn default_script() -> Vec<Step> {
    vec![
        Step::new(
            "income",
            "Hi! I'll help you find a credit card that suits how you earn and spend. \
             To start, what's your approximate monthly income?",
            brackets::labels(&brackets::INCOME),
            IncomeParser,
        ),
        spend_step(
            "spending-dining",
            "Thanks! Now for your spending. How much do you usually spend on dining and restaurants each month?",
            SpendCategory::Dining,
            &brackets::DINING,
        ),
        spend_step(
            "spending-fuel",
            "How much do you spend on fuel each month?",
            SpendCategory::Fuel,
            &brackets::FUEL,
        ),
        spend_step(
            "spending-groceries",
            "And on groceries and everyday shopping?",
            SpendCategory::Groceries,
            &brackets::GROCERIES,
        ),
        spend_step(
            "spending-travel",
            "On average, how much goes on travel (flights, hotels, bookings) per month?",
            SpendCategory::Travel,
            &brackets::TRAVEL,
        ),
        Step::new(
            "spending-online",
            "What's your monthly online shopping spend?",
            brackets::labels(&brackets::ONLINE),
            SpendingParser::new(SpendCategory::Online, &brackets::ONLINE)
                .with_seed(SpendCategory::General, brackets::DEFAULT_GENERAL_SPEND),
        ),
        Step::new(
            "benefits",
            "Which benefits matter most to you? You can pick more than one.",
            brackets::BENEFIT_OPTIONS.to_vec(),
            BenefitsParser,
        )
        .multi_select(),
        Step::new(
            "credit-score",
            "Roughly where does your credit score sit?",
            brackets::labels(&brackets::CREDIT_SCORE),
            CreditScoreParser,
        ),
        Step::new(
            "primary-use",
            "Last one: what will you mainly use this card for?",
            brackets::PRIMARY_USE_OPTIONS.to_vec(),
            PrimaryUseParser,
        ),
    ]
}

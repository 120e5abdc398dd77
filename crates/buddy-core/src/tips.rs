//! Tip Engine - canned savings advice
//!
//! Tips come from an ordered table of rules. Each rule decides whether it
//! applies to the spending breakdown and, if so, builds one [`Tip`]. The
//! engine evaluates the rules in priority order and keeps the first
//! [`MAX_TIPS`] results.
//!
//! ## Built-in rules, in priority order
//!
//! 1. **Top category** - advice for the biggest spend when it is
//!    "Food Delivery", "Shopping" or "Going Out"
//! 2. **Sutta** - projected monthly saving from cutting back
//! 3. **Coffee** - home brewing once coffee spend passes 200
//! 4. **Subscriptions** - always applies
//!
//! The daily encouragement message is picked separately at random.

use rand::Rng;

use crate::models::{CategorySpend, Tip};

/// Maximum number of tips returned per request
pub const MAX_TIPS: usize = 3;

/// Coffee spend above which the barista tip fires
pub const COFFEE_THRESHOLD: f64 = 200.0;

/// Share of sutta spend assumed saved by cutting back
const SUTTA_REDUCTION: f64 = 0.75;

/// Encouragement messages, one picked per tips request
pub const ENCOURAGEMENTS: [&str; 5] = [
    "You're doing amazing! Every small step is a huge win. ✨",
    "Look at you, taking control of your finances! We love to see it. 💖",
    "Keep slaying! Your future self will thank you for this. 🚀",
    "Remember, you got this! One good choice at a time. 😊",
    "Building good habits is a superpower. You're a hero! 🦸",
];

/// Pick one encouragement message uniformly at random
pub fn pick_encouragement<R: Rng>(rng: &mut R) -> &'static str {
    ENCOURAGEMENTS[rng.gen_range(0..ENCOURAGEMENTS.len())]
}

/// Input shared by every tip rule
pub struct TipContext<'a> {
    /// Debit spend per category
    pub spend_by_category: &'a CategorySpend,
    /// Number of transactions in the snapshot, all types included
    pub transaction_count: usize,
}

impl<'a> TipContext<'a> {
    pub fn new(spend_by_category: &'a CategorySpend, transaction_count: usize) -> Self {
        Self {
            spend_by_category,
            transaction_count,
        }
    }

    /// Highest-spend category, if any
    pub fn top_category(&self) -> Option<(&'a str, f64)> {
        self.spend_by_category.ranked().into_iter().next()
    }

    pub fn spend_for(&self, category: &str) -> Option<f64> {
        self.spend_by_category.get(category)
    }
}

/// A single rule in the tip table
pub trait TipRule: Send + Sync {
    /// Stable identifier, used in logs
    fn id(&self) -> &'static str;

    /// Whether this rule produces a tip for the context
    fn applies(&self, ctx: &TipContext<'_>) -> bool;

    /// Build the tip. Only called when [`TipRule::applies`] returned true.
    fn build(&self, ctx: &TipContext<'_>) -> Tip;
}

/// Advice for the single highest-spend category
pub struct TopCategoryRule;

impl TipRule for TopCategoryRule {
    fn id(&self) -> &'static str {
        "top_category"
    }

    fn applies(&self, ctx: &TipContext<'_>) -> bool {
        matches!(
            ctx.top_category(),
            Some(("Food Delivery" | "Shopping" | "Going Out", _))
        )
    }

    fn build(&self, ctx: &TipContext<'_>) -> Tip {
        let (category, amount) = ctx.top_category().unwrap_or(("", 0.0));
        match category {
            "Food Delivery" => Tip::new(
                "Level-Up Your Kitchen Game!",
                format!(
                    "You're a top foodie, spending ₹{:.0} on deliveries! Try cooking one meal at home this week to save big and feel like a chef.",
                    amount
                ),
                "🍳",
            ),
            "Shopping" => Tip::new(
                "Master the 24-Hour Rule",
                "That shopping haul looks great! Next time you see something you love, try waiting 24 hours before buying. It's a secret trick to avoid impulse buys.",
                "🛍️",
            ),
            _ => Tip::new(
                "Pre-Game Like a Pro",
                "Fun nights out are the best! You could save a bit by having a drink at home before you head out. Your wallet will be just as happy as you are!",
                "🥂",
            ),
        }
    }
}

/// Savings projection for cutting back on sutta
pub struct SuttaRule;

impl SuttaRule {
    /// Per-transaction average, cut by 75%, over a 30-day month
    pub fn monthly_saving(amount: f64, transaction_count: usize) -> f64 {
        (amount / transaction_count as f64 * SUTTA_REDUCTION) * 30.0
    }
}

impl TipRule for SuttaRule {
    fn id(&self) -> &'static str {
        "sutta"
    }

    fn applies(&self, ctx: &TipContext<'_>) -> bool {
        ctx.transaction_count > 0 && ctx.spend_for("Sutta").is_some()
    }

    fn build(&self, ctx: &TipContext<'_>) -> Tip {
        let amount = ctx.spend_for("Sutta").unwrap_or(0.0);
        let saving = Self::monthly_saving(amount, ctx.transaction_count);
        Tip::new(
            "Power-Up Your Health & Wallet",
            format!(
                "Cutting back on just one sutta a day could save you over ₹{:.0} a month. Imagine what you could do with that!",
                saving
            ),
            "💪",
        )
    }
}

/// Home brewing once coffee spend passes [`COFFEE_THRESHOLD`]
pub struct CoffeeRule;

impl TipRule for CoffeeRule {
    fn id(&self) -> &'static str {
        "coffee"
    }

    fn applies(&self, ctx: &TipContext<'_>) -> bool {
        ctx.spend_for("Coffee")
            .is_some_and(|amount| amount > COFFEE_THRESHOLD)
    }

    fn build(&self, _ctx: &TipContext<'_>) -> Tip {
        Tip::new(
            "Become Your Own Barista",
            "Your coffee game is strong! Making your own brew a few times a week is not only fun but could easily save you hundreds. You got this!",
            "☕",
        )
    }
}

/// Generic subscription check, always included
pub struct SubscriptionsRule;

impl TipRule for SubscriptionsRule {
    fn id(&self) -> &'static str {
        "subscriptions"
    }

    fn applies(&self, _ctx: &TipContext<'_>) -> bool {
        true
    }

    fn build(&self, _ctx: &TipContext<'_>) -> Tip {
        Tip::new(
            "Check Your Subscriptions",
            "Do a quick check of your subscriptions like Netflix, etc. Sometimes we forget what we're paying for! A quick cleanup can unlock easy savings.",
            "📺",
        )
    }
}

/// Evaluates tip rules in priority order
pub struct TipEngine {
    rules: Vec<Box<dyn TipRule>>,
}

impl Default for TipEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TipEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(TopCategoryRule));
        engine.register(Box::new(SuttaRule));
        engine.register(Box::new(CoffeeRule));
        engine.register(Box::new(SubscriptionsRule));

        engine
    }

    /// Create an engine with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Append a rule at the lowest priority
    pub fn register(&mut self, rule: Box<dyn TipRule>) {
        self.rules.push(rule);
    }

    /// Rule identifiers in evaluation order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Run every rule in order and keep the first [`MAX_TIPS`] tips
    pub fn generate(&self, ctx: &TipContext<'_>) -> Vec<Tip> {
        let mut tips: Vec<Tip> = self
            .rules
            .iter()
            .filter(|rule| rule.applies(ctx))
            .map(|rule| {
                tracing::debug!(rule = rule.id(), "Tip rule matched");
                rule.build(ctx)
            })
            .collect();

        tips.truncate(MAX_TIPS);
        tips
    }
}

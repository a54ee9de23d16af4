//! Saving tips

pub const SPENDING_TIPS: &[&str] = &[
    "🍕 Food: Meal prep on Sundays saves $50+/week",
    "🚗 Transport: Carpool twice a week = $40/month savings",
    "🛒 Shopping: 24-hour rule - wait a day before buying",
    "📄 Bills: Negotiate recurring bills like internet once a year",
    "🎮 Fun: Library free events instead of expensive outings",
    "💡 General: Use cash for discretionary spending",
];

pub fn format_tips() -> String {
    let mut output = String::from("💡 Spending Tips\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    for tip in SPENDING_TIPS {
        output.push_str(&format!("• {}\n", tip));
    }
    output
}

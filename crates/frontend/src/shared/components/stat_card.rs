use crate::shared::icons::icon;
use leptos::prelude::*;

fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    value: u64,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{format_thousands(value)}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_thousands;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(15), "15");
        assert_eq!(format_thousands(45000), "45,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}

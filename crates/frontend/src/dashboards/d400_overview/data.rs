//! Статичные данные главного экрана

/// Карточка сводки: (заголовок, иконка, значение)
pub const SUMMARY_CARDS: [(&str, &str, u64); 5] = [
    ("Category", "category", 10),
    ("Product", "products", 50),
    ("Customers", "customers", 200),
    ("Order", "orders", 30),
    ("Invoice", "invoices", 15),
];

pub const CHART_TITLE: &str = "Rupees Over Time";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    Monthly,
    Weekly,
    Yearly,
}

/// Подписи по оси X и значения
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dataset {
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Monthly, Period::Weekly, Period::Yearly];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Monthly => "Monthly",
            Period::Weekly => "Weekly",
            Period::Yearly => "Yearly",
        }
    }

    pub fn dataset(&self) -> Dataset {
        match self {
            Period::Monthly => Dataset {
                labels: &["January", "February", "March", "April", "May", "June", "July"],
                values: &[3000.0, 2000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0],
            },
            Period::Weekly => Dataset {
                labels: &["Week 1", "Week 2", "Week 3", "Week 4"],
                values: &[1000.0, 1500.0, 2000.0, 2500.0],
            },
            Period::Yearly => Dataset {
                labels: &["2018", "2019", "2020", "2021", "2022", "2023"],
                values: &[20000.0, 25000.0, 30000.0, 35000.0, 40000.0, 45000.0],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_is_default() {
        assert_eq!(Period::default(), Period::Monthly);
    }

    #[test]
    fn test_labels_and_values_line_up() {
        for period in Period::ALL {
            let data = period.dataset();
            assert_eq!(data.labels.len(), data.values.len(), "{}", period.label());
        }
        assert_eq!(Period::Weekly.dataset().values[3], 2500.0);
        assert_eq!(Period::Yearly.dataset().labels[0], "2018");
    }
}

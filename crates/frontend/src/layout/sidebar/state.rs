/// Пункт бокового меню
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Dashboard", path: "/", icon: "dashboard" },
    NavItem { label: "Category", path: "/category", icon: "category" },
    NavItem { label: "Product", path: "/product", icon: "products" },
    NavItem { label: "Customers", path: "/customers", icon: "customers" },
    NavItem { label: "Invoices", path: "/invoices", icon: "invoices" },
];

/// Локальное состояние сайдбара; живёт вместе с оболочкой и никуда не сохраняется.
///
/// Закреплённый сайдбар не реагирует на наведение и переходы.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub expanded: bool,
    pub pinned: bool,
    pub query: String,
}

impl SidebarState {
    pub fn mouse_enter(&mut self) {
        if !self.pinned {
            self.expanded = true;
        }
    }

    pub fn mouse_leave(&mut self) {
        if !self.pinned {
            self.expanded = false;
        }
    }

    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
        self.expanded = self.pinned;
    }

    pub fn link_clicked(&mut self) {
        if !self.pinned {
            self.expanded = false;
        }
    }

    pub fn visible_items(&self) -> Vec<NavItem> {
        let query = self.query.trim().to_lowercase();
        NAV_ITEMS
            .into_iter()
            .filter(|item| item.label.to_lowercase().contains(&query))
            .collect()
    }
}

/// Активен ли пункт для текущего пути (`/` только точным совпадением)
pub fn is_active(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        current == "/"
    } else {
        current == item_path || current.starts_with(&format!("{}/", item_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_expands_and_collapses() {
        let mut s = SidebarState::default();
        s.mouse_enter();
        assert!(s.expanded);
        s.mouse_leave();
        assert!(!s.expanded);
    }

    #[test]
    fn test_pinned_ignores_hover_and_clicks() {
        let mut s = SidebarState::default();
        s.toggle_pin();
        assert!(s.pinned && s.expanded);
        s.mouse_leave();
        s.link_clicked();
        assert!(s.expanded);

        s.toggle_pin();
        assert!(!s.pinned);
        assert!(!s.expanded);
        s.mouse_enter();
        assert!(s.expanded);
    }

    #[test]
    fn test_link_click_collapses_unpinned() {
        let mut s = SidebarState::default();
        s.mouse_enter();
        s.link_clicked();
        assert!(!s.expanded);
    }

    #[test]
    fn test_query_filters_labels() {
        let mut s = SidebarState::default();
        assert_eq!(s.visible_items().len(), 5);

        s.query = "CUST".into();
        let labels: Vec<_> = s.visible_items().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Customers"]);

        s.query = "o".into();
        let labels: Vec<_> = s.visible_items().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Category", "Product", "Customers", "Invoices"]);

        s.query = "zzz".into();
        assert!(s.visible_items().is_empty());
    }

    #[test]
    fn test_active_path() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/category"));
        assert!(is_active("/product", "/product"));
        assert!(!is_active("/product", "/products"));
    }
}

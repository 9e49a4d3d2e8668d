//! Click handling of the demo kitchen queue and floor map.

use super::metrics::format_minutes;
use super::mock_updater::{MockDataUpdater, TABLE_SELECTOR, TABLE_TIME_SELECTOR};
use crate::enums::{OrderStatus, TableStatus};
use crate::shared::surface::PageSurface;

pub const ORDER_CARD_SELECTOR: &str = ".order-card";
pub const ORDER_STATUS_SELECTOR: &str = ".order-status";
pub const ORDER_ACTION_SELECTOR: &str = ".order-action";
pub const DONE_CLASS: &str = "done";

#[derive(Clone)]
pub struct KitchenBoard<S: PageSurface> {
    surface: S,
    updater: MockDataUpdater<S>,
}

impl<S: PageSurface> KitchenBoard<S> {
    pub fn new(surface: S, updater: MockDataUpdater<S>) -> Self {
        Self { surface, updater }
    }

    /// Attach click handlers to order actions and tables.
    /// Returns how many controls were bound.
    pub fn bind(&self) -> usize {
        let mut bound = 0;
        for action in self.surface.query_all(ORDER_ACTION_SELECTOR) {
            let board = self.clone();
            let target = action.clone();
            self.surface.on(
                &action,
                "click",
                Box::new(move || {
                    board.advance_order(&target);
                }),
            );
            bound += 1;
        }
        for table in self.surface.query_all(TABLE_SELECTOR) {
            let board = self.clone();
            let target = table.clone();
            self.surface.on(
                &table,
                "click",
                Box::new(move || {
                    board.toggle_table(&target);
                }),
            );
            bound += 1;
        }
        bound
    }

    /// Move the order owning `action` to its next status.
    /// Returns the new status, or `None` if nothing changed.
    pub fn advance_order(&self, action: &S::Element) -> Option<OrderStatus> {
        let surface = &self.surface;
        let card = surface.closest(action, ORDER_CARD_SELECTOR)?;
        let label = surface.query_within(&card, ORDER_STATUS_SELECTOR)?;
        let current = OrderStatus::from_label(&surface.text(&label))?;
        let next = current.next()?;

        surface.set_text(&label, next.label());
        surface.remove_class(&label, current.css_class());
        surface.add_class(&label, next.css_class());
        surface.set_text(action, next.action_label());
        if next.next().is_none() {
            surface.add_class(action, DONE_CLASS);
        }
        log::debug!("order moved {:?} -> {:?}", current, next);
        Some(next)
    }

    /// Flip a table between free and occupied and follow with the counter
    pub fn toggle_table(&self, table: &S::Element) -> TableStatus {
        let surface = &self.surface;
        let current =
            TableStatus::from_occupied(surface.has_class(table, TableStatus::OCCUPIED_CLASS));
        let next = current.toggled();
        let time = surface.query_within(table, TABLE_TIME_SELECTOR);

        match next {
            TableStatus::Occupied => {
                surface.add_class(table, TableStatus::OCCUPIED_CLASS);
                if let Some(time) = &time {
                    surface.set_text(time, &format_minutes(0));
                }
                self.updater.nudge_occupancy(1);
            }
            TableStatus::Free => {
                surface.remove_class(table, TableStatus::OCCUPIED_CLASS);
                if let Some(time) = &time {
                    surface.set_text(time, TableStatus::FREE_LABEL);
                }
                self.updater.nudge_occupancy(-1);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::mock_updater::{MetricPolicy, OCCUPANCY_ID};
    use crate::shared::config::default_config;
    use crate::shared::testing::MockSurface;

    fn board(surface: &MockSurface) -> KitchenBoard<MockSurface> {
        let updater = MockDataUpdater::new(
            surface.clone(),
            MetricPolicy::from(&default_config().metrics),
        );
        KitchenBoard::new(surface.clone(), updater)
    }

    #[test]
    fn test_order_advances_until_ready() {
        let surface = MockSurface::new();
        let card = surface.append(surface.root(), ".order-card");
        let status = surface.append_text(card, "span.order-status.status-new", "Novo");
        let footer = surface.append(card, ".order-footer");
        let action = surface.append_text(footer, "button.order-action", "Iniciar preparo");

        let board = board(&surface);
        assert_eq!(board.bind(), 1);

        surface.click(&action);
        assert_eq!(surface.text(&status), "Preparando");
        assert!(surface.has_class(&status, "status-preparing"));
        assert!(!surface.has_class(&status, "status-new"));

        surface.click(&action);
        assert_eq!(surface.text(&status), "Pronto");
        assert!(surface.has_class(&action, DONE_CLASS));

        assert_eq!(board.advance_order(&action), None);
        assert_eq!(surface.text(&status), "Pronto");
    }

    #[test]
    fn test_unknown_status_is_left_alone() {
        let surface = MockSurface::new();
        let card = surface.append(surface.root(), ".order-card");
        let status = surface.append_text(card, "span.order-status", "Cancelado");
        let action = surface.append(card, "button.order-action");

        assert_eq!(board(&surface).advance_order(&action), None);
        assert_eq!(surface.text(&status), "Cancelado");
    }

    #[test]
    fn test_table_toggle_moves_counter() {
        let surface = MockSurface::new();
        let root = surface.root();
        let counter = surface.append_text(root, "#occupied-count", "12/25");
        let table = surface.append(root, ".demo-table");
        let time = surface.append_text(table, ".table-time", "Livre");
        let board = board(&surface);
        board.bind();

        surface.click(&table);
        assert!(surface.has_class(&table, "occupied"));
        assert_eq!(surface.text(&time), "0 min");
        assert_eq!(surface.text(&counter), "13/25");

        surface.click(&table);
        assert!(!surface.has_class(&table, "occupied"));
        assert_eq!(surface.text(&time), "Livre");
        assert_eq!(surface.by_id(OCCUPANCY_ID).map(|c| surface.text(&c)).as_deref(), Some("12/25"));
    }
}

//! Seed data the demo screens are rendered from.

use crate::enums::{CampaignState, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tab/screen pairs of the demo, in display order
pub const DEMO_SCREENS: &[(&str, &str)] = &[
    ("dashboard", "Painel"),
    ("kitchen", "Cozinha"),
    ("campaigns", "Campanhas"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoTable {
    pub number: u32,
    /// Minutes since the table was seated; `None` when free
    pub occupied_minutes: Option<u32>,
}

impl DemoTable {
    pub fn label(&self) -> String {
        format!("Mesa {}", self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenOrder {
    pub number: u32,
    pub table: u32,
    pub items: Vec<String>,
    pub status: OrderStatus,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub channel: String,
    pub starts: NaiveDate,
    pub ends: NaiveDate,
}

impl Campaign {
    pub fn state(&self, today: NaiveDate) -> CampaignState {
        if today < self.starts {
            CampaignState::Scheduled
        } else if today > self.ends {
            CampaignState::Ended
        } else {
            CampaignState::Running
        }
    }

    /// `"01/03 – 31/03"`
    pub fn period_label(&self) -> String {
        format!(
            "{} – {}",
            self.starts.format("%d/%m"),
            self.ends.format("%d/%m")
        )
    }
}

/// Initial counter values of the dashboard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSeed {
    pub occupied: u32,
    pub total: u32,
    pub avg_minutes: u32,
    pub orders_today: u32,
}

pub fn dashboard_seed() -> DashboardSeed {
    DashboardSeed {
        occupied: 12,
        total: 25,
        avg_minutes: 18,
        orders_today: 87,
    }
}

pub fn tables() -> Vec<DemoTable> {
    [Some(35), None, Some(12), Some(48), None, Some(5), None, Some(22)]
        .into_iter()
        .enumerate()
        .map(|(i, occupied_minutes)| DemoTable {
            number: i as u32 + 1,
            occupied_minutes,
        })
        .collect()
}

pub fn kitchen_orders() -> Vec<KitchenOrder> {
    let order = |number, table, items: &[&str], status, minutes| KitchenOrder {
        number,
        table,
        items: items.iter().map(|s| s.to_string()).collect(),
        status,
        minutes,
    };
    vec![
        order(101, 3, &["2x Moqueca", "1x Suco de caju"], OrderStatus::Preparing, 14),
        order(102, 8, &["1x Picanha", "1x Farofa", "2x Guaraná"], OrderStatus::New, 3),
        order(103, 1, &["1x Feijoada"], OrderStatus::New, 1),
        order(104, 4, &["3x Pastel", "1x Caipirinha"], OrderStatus::Ready, 21),
    ]
}

pub fn campaigns(today: NaiveDate) -> Vec<Campaign> {
    let days = |n: i64| today + chrono::Duration::days(n);
    vec![
        Campaign {
            name: "Happy hour em dobro".to_string(),
            channel: "WhatsApp".to_string(),
            starts: days(-3),
            ends: days(11),
        },
        Campaign {
            name: "Sobremesa grátis às terças".to_string(),
            channel: "Instagram".to_string(),
            starts: days(-20),
            ends: days(-1),
        },
        Campaign {
            name: "Menu executivo".to_string(),
            channel: "Cardápio QR".to_string(),
            starts: days(2),
            ends: days(30),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tables_match_counter_range() {
        let occupied = tables().iter().filter(|t| t.occupied_minutes.is_some()).count();
        assert_eq!(occupied, 5);
        assert_eq!(tables()[0].label(), "Mesa 1");
    }

    #[test]
    fn test_campaign_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let list = campaigns(today);
        let states: Vec<CampaignState> = list.iter().map(|c| c.state(today)).collect();
        assert_eq!(
            states,
            vec![CampaignState::Running, CampaignState::Ended, CampaignState::Scheduled]
        );
        assert_eq!(list[1].state(today), CampaignState::Ended);
        assert_eq!(list[2].state(today), CampaignState::Scheduled);
        assert_eq!(list[2].state(list[2].ends), CampaignState::Running);
        assert_eq!(list[0].period_label(), "12/03 – 26/03");
    }
}

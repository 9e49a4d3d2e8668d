//! Static markup of the three demo screens. The live behaviour is attached
//! afterwards by `DemoController` through the DOM.

use crate::shared::components::StatCard;
use contracts::demo::catalog::{self, Campaign, DemoTable, KitchenOrder};
use contracts::demo::metrics::{format_minutes, Occupancy};
use contracts::demo::mock_updater::{AVG_TIME_ID, OCCUPANCY_ID};
use contracts::enums::{CampaignState, OrderStatus, TableStatus};
use leptos::prelude::*;

#[component]
pub fn DashboardScreen() -> impl IntoView {
    let seed = catalog::dashboard_seed();
    let occupancy = Occupancy {
        occupied: seed.occupied,
        total: seed.total,
    };

    view! {
        <div class="demo-stats">
            <StatCard
                label="Mesas ocupadas"
                icon_name="table"
                value=occupancy.label()
                value_id=OCCUPANCY_ID
            />
            <StatCard
                label="Tempo médio"
                icon_name="clock"
                value=format_minutes(seed.avg_minutes)
                value_id=AVG_TIME_ID
            />
            <StatCard
                label="Pedidos hoje"
                icon_name="chart"
                value=seed.orders_today.to_string()
            />
        </div>
        <div class="demo-floor">
            {catalog::tables().into_iter().map(|t| view! { <TableTile table=t /> }).collect_view()}
        </div>
    }
}

#[component]
fn TableTile(table: DemoTable) -> impl IntoView {
    let occupied =
        TableStatus::from_occupied(table.occupied_minutes.is_some()) == TableStatus::Occupied;
    let time = table
        .occupied_minutes
        .map(format_minutes)
        .unwrap_or_else(|| TableStatus::FREE_LABEL.to_string());

    view! {
        <div class="demo-table" class:occupied=occupied>
            <span class="table-label">{table.label()}</span>
            <span class="table-time">{time}</span>
        </div>
    }
}

#[component]
pub fn KitchenScreen() -> impl IntoView {
    view! {
        <ul class="kitchen-legend">
            {status_legend()
                .into_iter()
                .map(|(class, label)| view! { <li class=format!("kitchen-legend__item {}", class)>{label}</li> })
                .collect_view()}
        </ul>
        <div class="kitchen-queue">
            {catalog::kitchen_orders()
                .into_iter()
                .map(|order| view! { <OrderCard order=order /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn OrderCard(order: KitchenOrder) -> impl IntoView {
    let status = order.status;
    let action_class = if status.next().is_none() {
        "order-action button button--small done"
    } else {
        "order-action button button--small"
    };

    view! {
        <div class="order-card">
            <div class="order-card__header">
                <strong>{format!("#{} · Mesa {}", order.number, order.table)}</strong>
                <span class=format!("order-status {}", status.css_class())>{status.label()}</span>
            </div>
            <ul class="order-card__items">
                {order.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
            <div class="order-card__footer">
                <span class="order-time">{format_minutes(order.minutes)}</span>
                <button type="button" class=action_class>{status.action_label()}</button>
            </div>
        </div>
    }
}

#[component]
pub fn CampaignsScreen() -> impl IntoView {
    let today = chrono::Local::now().date_naive();

    view! {
        <ul class="campaign-list">
            {catalog::campaigns(today)
                .into_iter()
                .map(|c| view! { <CampaignRow campaign=c today=today /> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn CampaignRow(campaign: Campaign, today: chrono::NaiveDate) -> impl IntoView {
    let state = campaign.state(today);
    let period = campaign.period_label();

    view! {
        <li class="campaign-row">
            <div class="campaign-row__main">
                <strong>{campaign.name}</strong>
                <span class="campaign-row__channel">{campaign.channel}</span>
            </div>
            <span class="campaign-row__period">{period}</span>
            <CampaignBadge state=state />
        </li>
    }
}

#[component]
fn CampaignBadge(state: CampaignState) -> impl IntoView {
    view! {
        <span class=format!("badge badge--{}", state.code())>{state.label()}</span>
    }
}

/// Labels of every order status, for the kitchen legend
fn status_legend() -> Vec<(&'static str, &'static str)> {
    OrderStatus::all()
        .into_iter()
        .map(|s| (s.css_class(), s.label()))
        .collect()
}

pub mod campaign_state;
pub mod order_status;
pub mod table_status;
pub mod toast_kind;

pub use campaign_state::CampaignState;
pub use order_status::OrderStatus;
pub use table_status::TableStatus;
pub use toast_kind::ToastKind;

use serde::{Deserialize, Serialize};

/// Where a campaign stands relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignState {
    Scheduled,
    Running,
    Ended,
}

impl CampaignState {
    pub fn code(&self) -> &'static str {
        match self {
            CampaignState::Scheduled => "scheduled",
            CampaignState::Running => "running",
            CampaignState::Ended => "ended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignState::Scheduled => "Agendada",
            CampaignState::Running => "Ativa",
            CampaignState::Ended => "Encerrada",
        }
    }
}

//! Reward table records. Stored separately from the quest record and joined
//! on `questId` only; note the camelCase wire names on this side of the
//! format.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct RewardItem {
    #[serde(rename = "itemId")]
    pub item_id: u32,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "minCount")]
    pub min_count: u32,
    #[serde(rename = "maxCount")]
    pub max_count: u32,
    /// Drop weight, conceptually in [0, 1]. Not enforced by the format.
    pub probability: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct QuestRewardData {
    #[serde(rename = "questId")]
    pub quest_id: u32,
    #[serde(rename = "rewardId")]
    pub reward_id: u32,
    #[serde(rename = "rewardItems")]
    pub reward_items: Vec<RewardItem>,
}

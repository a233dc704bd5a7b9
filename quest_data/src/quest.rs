//! Serialized quest record graph.
//!
//! Field names, nesting and default literals are dictated by the engine's
//! deserializer and must match it byte for byte, including the legacy shadow
//! keys that differ from their sibling only by a trailing `=`. Rust-side
//! names are ours; everything on the wire goes through `serde(rename)`.
//!
//! Throughout the format a `_Name` (or `Name`) is a human-readable
//! annotation only. Consumers key off `_Value`/`Value`.

use crate::stages::Stage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Zeroed GUID used by the engine for "no reference".
pub const NIL_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Display label for a quest level, `"★1"`..`"★9"`.
///
/// No range check: the engine accepts any stringified level and so do we
/// (the editor UI only offers 1..=9).
pub fn difficulty_rank_name(level: u32) -> String {
    format!("★{level}")
}

pub const MIN_QUEST_LEVEL: u32 = 1;
pub const MAX_QUEST_LEVEL: u32 = 9;

/// Sentinel rank label for an unranked monster.
pub const DIFFICULTY_RANK_NONE: &str = "None";

/// Rank labels offered by monster pickers: `"None"` then `"★1"`..`"★9"`.
pub fn difficulty_rank_options() -> Vec<String> {
    let mut options = vec![DIFFICULTY_RANK_NONE.to_string()];
    options.extend((MIN_QUEST_LEVEL..=MAX_QUEST_LEVEL).map(difficulty_rank_name));
    options
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestType {
    Hunting = 0,
    Kill = 1,
    Capture = 2,
    Arena = 5,
    BossRush = 6,
    Special = 7,
}

impl QuestType {
    pub const ALL: [QuestType; 6] = [
        QuestType::Hunting,
        QuestType::Kill,
        QuestType::Capture,
        QuestType::Arena,
        QuestType::BossRush,
        QuestType::Special,
    ];

    pub fn value(self) -> i64 {
        self as i64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossRushPopType {
    Beginning = 0,
    RemainHp = 2,
    HuntNumOrTime = 4,
}

impl BossRushPopType {
    pub const ALL: [BossRushPopType; 3] = [
        BossRushPopType::Beginning,
        BossRushPopType::RemainHp,
        BossRushPopType::HuntNumOrTime,
    ];

    pub fn value(self) -> i64 {
        self as i64
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct NameValue {
    #[serde(rename = "_Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "_Value")]
    pub value: i64,
}

impl NameValue {
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            value,
        }
    }
}

/// GUID-valued variant of [`NameValue`] (no underscore prefix on the wire).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct NameValueAlt {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct ResourceId {
    #[serde(rename = "_ID")]
    pub id: String,
    #[serde(rename = "_Resource")]
    pub resource: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct FieldId {
    #[serde(rename = "_Name")]
    pub name: String,
    #[serde(rename = "_Value")]
    pub value: i64,
}

impl FieldId {
    pub fn for_stage(stage: Stage) -> Self {
        Self {
            name: stage.code().to_string(),
            value: stage.field_value(),
        }
    }
}

/// Patrol route reference. Mixed key convention (`Name` / `_Value`) is the
/// engine's, not ours.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct RouteId {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "_Value")]
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct OptionTag {
    #[serde(rename = "Value")]
    pub value: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct AdvancedSettings {
    #[serde(rename = "_IsDeepSleepCreate")]
    pub is_deep_sleep_create: bool,
}

/// One monster placement within a quest (the engine calls these main
/// targets).
///
/// `_DifficultyRankId.Name` is derived from the owning quest's level and is
/// never authored directly; use [`MainTargetData::for_quest_level`] or
/// [`QuestData::set_quest_level`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MainTargetData {
    #[serde(rename = "_AdvancedSettings")]
    pub advanced_settings: AdvancedSettings,
    #[serde(rename = "_AreaNo")]
    pub area_no: u32,
    #[serde(rename = "_DifficultyAdjustRange")]
    pub difficulty_adjust_range: i32,
    #[serde(rename = "_DifficultyRankId")]
    pub difficulty_rank_id: NameValueAlt,
    #[serde(rename = "_EmID")]
    pub em_id: u32,
    #[serde(rename = "_EventTargetID")]
    pub event_target_id: String,
    #[serde(rename = "_FixedSize")]
    pub fixed_size: u32,
    #[serde(rename = "_GroupID")]
    pub group_id: u32,
    #[serde(rename = "_InitPos")]
    pub init_pos: String,
    #[serde(rename = "_IsUseRandomSize")]
    pub is_use_random_size: bool,
    #[serde(rename = "_LayoutKeepID")]
    pub layout_keep_id: i32,
    #[serde(rename = "_LegendaryID")]
    pub legendary_id: String,
    #[serde(rename = "_OptionTag")]
    pub option_tag: OptionTag,
    #[serde(rename = "_RandomSizeTblId")]
    pub random_size_tbl_id: NameValueAlt,
    #[serde(rename = "_RoleID")]
    pub role_id: String,
    #[serde(rename = "_RouteID")]
    pub route_id: RouteId,
    #[serde(rename = "_SetAreaNo")]
    pub set_area_no: u32,
    #[serde(rename = "_StoryTargetID")]
    pub story_target_id: u32,
}

impl Default for MainTargetData {
    fn default() -> Self {
        let arena = Stage::St401.spawn_defaults();
        Self {
            advanced_settings: AdvancedSettings {
                is_deep_sleep_create: false,
            },
            area_no: 255,
            difficulty_adjust_range: 0,
            difficulty_rank_id: NameValueAlt {
                name: String::new(),
                value: NIL_ID.to_string(),
            },
            em_id: 0,
            event_target_id: String::from("INVALID"),
            fixed_size: 100,
            group_id: 0,
            init_pos: arena.init_pos.to_string(),
            is_use_random_size: false,
            layout_keep_id: -1,
            legendary_id: String::from("NORMAL"),
            option_tag: OptionTag { value: 0 },
            random_size_tbl_id: NameValueAlt {
                name: String::new(),
                value: String::from("f8f74ab0-0002-0000-00000002003e203e"),
            },
            role_id: String::from("NORMAL"),
            route_id: arena.route_id(),
            set_area_no: 255,
            story_target_id: 0,
        }
    }
}

impl MainTargetData {
    /// Fresh monster template with the rank label derived from the owning
    /// quest's level.
    pub fn for_quest_level(level: u32) -> Self {
        let mut monster = Self::default();
        monster.difficulty_rank_id.name = difficulty_rank_name(level);
        monster
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct ConditionalMoveData {
    #[serde(rename = "_DestArray")]
    pub dest_array: Vec<Value>,
    #[serde(rename = "_IsUse")]
    pub is_use: bool,
    #[serde(rename = "_RevertOnCompleted")]
    pub revert_on_completed: bool,
    #[serde(rename = "_StartAfterFirstCondition")]
    pub start_after_first_condition: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct TargetInfo {
    #[serde(rename = "_ConditionalMoveData")]
    pub conditional_move_data: ConditionalMoveData,
    #[serde(rename = "_EmTargetID")]
    pub em_target_id: u32,
    #[serde(rename = "_LegendaryID")]
    pub legendary_id: String,
    #[serde(rename = "_RoleID")]
    pub role_id: String,
    #[serde(rename = "_ShowTargetGuide")]
    pub show_target_guide: bool,
    #[serde(rename = "_TargetIDValue")]
    pub target_id_value: i64,
    #[serde(rename = "_TargetValue")]
    pub target_value: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ClearCondition {
    #[serde(rename = "_TargetInfoArray")]
    pub target_info_array: Vec<TargetInfo>,
    #[serde(rename = "_TargetType")]
    pub target_type: i64,
}

impl Default for ClearCondition {
    fn default() -> Self {
        Self {
            target_info_array: vec![],
            target_type: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct SubBossInfo {
    #[serde(rename = "_ConditionalMoveData")]
    pub conditional_move_data: ConditionalMoveData,
    #[serde(rename = "_EmID")]
    pub em_id: u32,
    #[serde(rename = "_EmTargetID")]
    pub em_target_id: u32,
    #[serde(rename = "_LegendaryID")]
    pub legendary_id: String,
    #[serde(rename = "_RoleID")]
    pub role_id: String,
}

/// Arena block. Everything but the camp flag is an opaque engine payload
/// that must round-trip verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct ArenaData {
    #[serde(rename = "_IsUserCamp")]
    pub is_user_camp: bool,
    #[serde(rename = "_MissionID")]
    pub mission_id: Value,
    #[serde(rename = "_SelectDatas")]
    pub select_datas: Value,
    #[serde(rename = "_SelectNpcDatas")]
    pub select_npc_datas: Value,
    #[serde(rename = "_TimeRankA")]
    pub time_rank_a: Value,
    #[serde(rename = "_TimeRankB")]
    pub time_rank_b: Value,
    #[serde(rename = "_TimeRankS")]
    pub time_rank_s: Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct BossRushParams {
    #[serde(rename = "_PopType")]
    pub pop_type: i64,
    #[serde(rename = "_ConditionValue_1")]
    pub condition_value_1: i64,
    #[serde(rename = "_ConditionValue_2")]
    pub condition_value_2: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OrderCondition {
    #[serde(rename = "_MaxPlayerNum")]
    pub max_player_num: u32,
    #[serde(rename = "_OrderHR")]
    pub order_hr: u32,
    #[serde(rename = "_OrderMR")]
    pub order_mr: u32,
    #[serde(rename = "_PremiseMission")]
    pub premise_mission: NameValue,
}

impl Default for OrderCondition {
    fn default() -> Self {
        Self {
            max_player_num: 4,
            order_hr: 21,
            order_mr: 0,
            premise_mission: NameValue::new("前置任务ID", -282127296),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct QuestMsgAuto {
    #[serde(rename = "_IsAuto")]
    pub is_auto: bool,
    #[serde(rename = "_MsgID", skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    #[serde(rename = "_MsgIDs", skip_serializing_if = "Option::is_none")]
    pub msg_ids: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct QuestMsg {
    #[serde(rename = "_ClearConditionMsg")]
    pub clear_condition_msg: QuestMsgAuto,
    #[serde(rename = "_ClientNameMsg")]
    pub client_name_msg: String,
    #[serde(rename = "_DetailMsg")]
    pub detail_msg: String,
    #[serde(rename = "_FailConditionMsg")]
    pub fail_condition_msg: QuestMsgAuto,
    #[serde(rename = "_FailConditionMsg_Other")]
    pub fail_condition_msg_other: String,
    #[serde(rename = "_OrderConditionMsg")]
    pub order_condition_msg: QuestMsgAuto,
    #[serde(rename = "_OrderConditionMsg_Other")]
    pub order_condition_msg_other: String,
    #[serde(rename = "_OrderConditionMsg_StProgress")]
    pub order_condition_msg_st_progress: String,
    #[serde(rename = "_TitleMsg")]
    pub title_msg: String,
}

impl Default for QuestMsg {
    fn default() -> Self {
        Self {
            clear_condition_msg: QuestMsgAuto {
                is_auto: true,
                msg_id: Some(NIL_ID.to_string()),
                msg_ids: None,
            },
            client_name_msg: String::from("9707f537-aadd-4e0e-983a-8ec7c72fc1fb"),
            detail_msg: String::from("b15f3acb-b6ca-4e18-968b-2a5161f9679f"),
            fail_condition_msg: QuestMsgAuto {
                is_auto: true,
                msg_id: None,
                msg_ids: Some(vec![NIL_ID.to_string(), NIL_ID.to_string()]),
            },
            fail_condition_msg_other: String::from("1e801eb7-04d4-4ebe-9423-62e633c1b3ee"),
            order_condition_msg: QuestMsgAuto {
                is_auto: true,
                msg_id: None,
                msg_ids: Some(vec![NIL_ID.to_string(), NIL_ID.to_string()]),
            },
            order_condition_msg_other: String::from("acbf575d-58a2-46a4-bd33-af9eb4d105be"),
            order_condition_msg_st_progress: String::from("7d277c75-8e3e-4073-9351-072604943ce6"),
            title_msg: String::from("ad16cdce-1ad5-4ba9-8ac2-4cee6dd52021"),
        }
    }
}

/// Flat scalar parameter block of a quest. The `=`-suffixed keys are legacy
/// duplicates the engine still emits and expects; they shadow the real
/// array fields and carry an opaque payload (null in practice).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DataList {
    #[serde(rename = "_AddPoint")]
    pub add_point: u32,
    #[serde(rename = "_ArenaFenceCloseTime")]
    pub arena_fence_close_time: u32,
    #[serde(rename = "_ArenaFenceInitWaitTime")]
    pub arena_fence_init_wait_time: u32,
    #[serde(rename = "_ArenaFenceReuseableTime")]
    pub arena_fence_reuseable_time: u32,
    #[serde(rename = "_ArenaFenceStatus")]
    pub arena_fence_status: String,
    #[serde(rename = "_ArenaPillarStatus")]
    pub arena_pillar_status: String,
    #[serde(rename = "_BattleBGM")]
    pub battle_bgm: i64,
    #[serde(rename = "_BossRushParams")]
    pub boss_rush_params: Vec<BossRushParams>,
    #[serde(rename = "_BossRushParams=")]
    pub boss_rush_params_legacy: Value,
    #[serde(rename = "_ClearBGM")]
    pub clear_bgm: i64,
    #[serde(rename = "_ClearCondition")]
    pub clear_condition: ClearCondition,
    #[serde(rename = "_EnableGuestNpc")]
    pub enable_guest_npc: bool,
    #[serde(rename = "_ExOverrideID")]
    pub ex_override_id: i64,
    #[serde(rename = "_HRPoint")]
    pub hr_point: u32,
    #[serde(rename = "_IconType")]
    pub icon_type: NameValue,
    #[serde(rename = "_Index")]
    pub index: u32,
    #[serde(rename = "_IsOverrideArenaFenceParam")]
    pub is_override_arena_fence_param: bool,
    #[serde(rename = "_IsOverrideArenaPillarParam")]
    pub is_override_arena_pillar_param: bool,
    #[serde(rename = "_IsSettingSupply")]
    pub is_setting_supply: bool,
    #[serde(rename = "_MissionId")]
    pub mission_id: NameValue,
    #[serde(rename = "_OrderCondition")]
    pub order_condition: OrderCondition,
    #[serde(rename = "_PartnerNpc")]
    pub partner_npc: NameValue,
    #[serde(rename = "_QuestAttribute")]
    pub quest_attribute: i64,
    #[serde(rename = "_QuestLife")]
    pub quest_life: u32,
    #[serde(rename = "_QuestLv")]
    pub quest_lv: u32,
    #[serde(rename = "_QuestMsg")]
    pub quest_msg: QuestMsg,
    #[serde(rename = "_QuestType")]
    pub quest_type: i64,
    #[serde(rename = "_RemMoney")]
    pub rem_money: u32,
    #[serde(rename = "_Stage")]
    pub stage: NameValue,
    #[serde(rename = "_SubBossInfoArray")]
    pub sub_boss_info_array: Vec<SubBossInfo>,
    #[serde(rename = "_SubBossInfoArray=")]
    pub sub_boss_info_array_legacy: Value,
    #[serde(rename = "_SupplyID")]
    pub supply_id: NameValue,
    #[serde(rename = "_TimeLimit")]
    pub time_limit: u32,
    #[serde(rename = "_Version")]
    pub version: u32,
}

impl Default for DataList {
    fn default() -> Self {
        Self {
            add_point: 198,
            arena_fence_close_time: 60,
            arena_fence_init_wait_time: 60,
            arena_fence_reuseable_time: 120,
            arena_fence_status: String::from("OPEN"),
            arena_pillar_status: String::from("USE"),
            battle_bgm: 0,
            boss_rush_params: vec![],
            boss_rush_params_legacy: Value::Null,
            clear_bgm: 0,
            clear_condition: ClearCondition::default(),
            enable_guest_npc: false,
            ex_override_id: 0,
            hr_point: 0,
            icon_type: NameValue::new("app.QuestDef.QUEST_ICON_TYPE_Fixed", 1927315328),
            index: 0,
            is_override_arena_fence_param: false,
            is_override_arena_pillar_param: false,
            is_setting_supply: false,
            mission_id: NameValue::new("New Quest", 0),
            order_condition: OrderCondition::default(),
            partner_npc: NameValue::new("無効値", 4),
            quest_attribute: 0,
            quest_life: 2,
            quest_lv: 1,
            quest_msg: QuestMsg::default(),
            quest_type: 0,
            rem_money: 0,
            stage: NameValue::new(Stage::St401.code(), Stage::St401.field_value()),
            sub_boss_info_array: vec![],
            sub_boss_info_array_legacy: Value::Null,
            supply_id: NameValue::new("無効値", 1966686080),
            time_limit: 50,
            version: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct MessageData {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Text")]
    pub text: String,
}

/// Localized message bundle attached to a quest. `language` is a raw game
/// language code (see [`crate::catalog::language_name`]).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct MessageAsset {
    #[serde(rename = "Language")]
    pub language: i64,
    #[serde(rename = "MessageData")]
    pub message_data: Vec<MessageData>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct ZakoLayoutTag {
    #[serde(rename = "_FieldID")]
    pub field_id: FieldId,
    #[serde(rename = "_IsIntentionallyBlank")]
    pub is_intentionally_blank: bool,
    #[serde(rename = "_Value")]
    pub value: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BossZakoData {
    #[serde(rename = "_AnimalLayoutID")]
    pub animal_layout_id: ResourceId,
    #[serde(rename = "_FieldID")]
    pub field_id: FieldId,
    #[serde(rename = "_MainTargetDataList")]
    pub main_target_data_list: Vec<MainTargetData>,
    #[serde(rename = "_SubBossLayoutID")]
    pub sub_boss_layout_id: ResourceId,
    #[serde(rename = "_ZakoLayoutID")]
    pub zako_layout_id: ResourceId,
    #[serde(rename = "_ZakoLayoutTag")]
    pub zako_layout_tag: ZakoLayoutTag,
}

impl Default for BossZakoData {
    fn default() -> Self {
        Self {
            animal_layout_id: ResourceId {
                id: NIL_ID.to_string(),
                resource: None,
            },
            field_id: FieldId::for_stage(Stage::St401),
            main_target_data_list: vec![],
            sub_boss_layout_id: ResourceId {
                id: String::from("c8ed5a65-8c96-48cb-3a15eb556208668e"),
                resource: Some(String::from(
                    "assets:/GameDesign/Stage/st401/Layout/Loaded/Enemy/SubBoss/st401_SubBoss_Ms006025_00.pog.json",
                )),
            },
            zako_layout_id: ResourceId {
                id: NIL_ID.to_string(),
                resource: None,
            },
            zako_layout_tag: ZakoLayoutTag {
                field_id: FieldId::for_stage(Stage::St401),
                is_intentionally_blank: false,
                value: 4,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EnvironmentData {
    #[serde(rename = "_EnvTimeRate")]
    pub env_time_rate: i64,
    #[serde(rename = "_EnvType")]
    pub env_type: NameValue,
    #[serde(rename = "_ForcastDatas")]
    pub forcast_datas: Vec<Value>,
    #[serde(rename = "_IsFixEnv")]
    pub is_fix_env: bool,
    #[serde(rename = "_IsTransitionEnv")]
    pub is_transition_env: bool,
    #[serde(rename = "_StageType")]
    pub stage_type: NameValue,
    #[serde(rename = "_StopTiming_EnvType")]
    pub stop_timing_env_type: NameValue,
}

impl Default for EnvironmentData {
    fn default() -> Self {
        Self {
            env_time_rate: 0,
            env_type: NameValue::new("荒廃期", 1961958400),
            forcast_datas: vec![],
            is_fix_env: false,
            is_transition_env: false,
            stage_type: NameValue::new(Stage::St401.code(), Stage::St401.field_value()),
            stop_timing_env_type: NameValue::new("無効値", 2110947200),
        }
    }
}

// The guide message block predates the engine's naming convention sweep,
// hence the bare and lowerCamel keys.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LGuideMsgData {
    #[serde(rename = "IsSubOrder")]
    pub is_sub_order: bool,
    #[serde(rename = "SetMsgID")]
    pub set_msg_id: String,
    #[serde(rename = "gaugeSpritNum")]
    pub gauge_sprit_num: i64,
    #[serde(rename = "isCanSkip")]
    pub is_can_skip: bool,
    #[serde(rename = "isGauge")]
    pub is_gauge: bool,
}

impl Default for LGuideMsgData {
    fn default() -> Self {
        Self {
            is_sub_order: false,
            set_msg_id: NIL_ID.to_string(),
            gauge_sprit_num: 0,
            is_can_skip: false,
            is_gauge: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MoonData {
    #[serde(rename = "_IsSetMoon")]
    pub is_set_moon: bool,
    #[serde(rename = "_MoonOptionsVariationIndex")]
    pub moon_options_variation_index: i64,
    #[serde(rename = "_MoonSetting")]
    pub moon_setting: NameValue,
    #[serde(rename = "_MoonTextureVariationIndex")]
    pub moon_texture_variation_index: i64,
}

impl Default for MoonData {
    fn default() -> Self {
        Self {
            is_set_moon: false,
            moon_options_variation_index: 0,
            moon_setting: NameValue::new("無効値", -770399616),
            moon_texture_variation_index: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct EmSetAnimalTag {
    #[serde(rename = "_FieldID")]
    pub field_id: FieldId,
    #[serde(rename = "_Value")]
    pub value: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EmSetData {
    #[serde(rename = "_EmSet_AnimalTag")]
    pub em_set_animal_tag: EmSetAnimalTag,
    #[serde(rename = "_EmSet_BossZako")]
    pub em_set_boss_zako: Value,
    #[serde(rename = "_Stage")]
    pub stage: NameValue,
}

impl Default for EmSetData {
    fn default() -> Self {
        Self {
            em_set_animal_tag: EmSetAnimalTag {
                field_id: FieldId::for_stage(Stage::St401),
                value: 1,
            },
            em_set_boss_zako: Value::Null,
            stage: NameValue::new(Stage::St401.code(), Stage::St401.field_value()),
        }
    }
}

/// Environment / time-of-day / moon settings block.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StreamQuestData {
    #[serde(rename = "_EmSetData")]
    pub em_set_data: EmSetData,
    #[serde(rename = "_IsFixWorldTime")]
    pub is_fix_world_time: bool,
    #[serde(rename = "_IsFixWorldTimeQuest")]
    pub is_fix_world_time_quest: bool,
    #[serde(rename = "_IsSetWorldTime")]
    pub is_set_world_time: bool,
    #[serde(rename = "_IsSetWorldTimeQuest")]
    pub is_set_world_time_quest: bool,
    #[serde(rename = "_IsStopTimeTiming")]
    pub is_stop_time_timing: bool,
    #[serde(rename = "_IsStopTimeTimingQuest")]
    pub is_stop_time_timing_quest: bool,
    #[serde(rename = "_MissionTypeSerial")]
    pub mission_type_serial: NameValue,
    #[serde(rename = "_SetEnvironmentDataList")]
    pub set_environment_data_list: Vec<EnvironmentData>,
    #[serde(rename = "_SetLGuideMsgData")]
    pub set_l_guide_msg_data: LGuideMsgData,
    #[serde(rename = "_SetMoonData")]
    pub set_moon_data: MoonData,
    #[serde(rename = "_StopTimeTimingHour")]
    pub stop_time_timing_hour: u32,
    #[serde(rename = "_StopTimeTimingHourQuest")]
    pub stop_time_timing_hour_quest: u32,
    #[serde(rename = "_StopTimeTimingMinute")]
    pub stop_time_timing_minute: u32,
    #[serde(rename = "_StopTimeTimingMinuteQuest")]
    pub stop_time_timing_minute_quest: u32,
    #[serde(rename = "_WorldTimeHour")]
    pub world_time_hour: u32,
    #[serde(rename = "_WorldTimeHourQuest")]
    pub world_time_hour_quest: u32,
    #[serde(rename = "_WorldTimeMinute")]
    pub world_time_minute: u32,
    #[serde(rename = "_WorldTimeMinuteQuest")]
    pub world_time_minute_quest: u32,
}

impl Default for StreamQuestData {
    fn default() -> Self {
        Self {
            em_set_data: EmSetData::default(),
            is_fix_world_time: false,
            is_fix_world_time_quest: false,
            is_set_world_time: false,
            is_set_world_time_quest: true,
            is_stop_time_timing: false,
            is_stop_time_timing_quest: false,
            mission_type_serial: NameValue::new("活动任务类型", 1025928384),
            set_environment_data_list: vec![EnvironmentData::default()],
            set_l_guide_msg_data: LGuideMsgData::default(),
            set_moon_data: MoonData::default(),
            stop_time_timing_hour: 0,
            stop_time_timing_hour_quest: 0,
            stop_time_timing_minute: 0,
            stop_time_timing_minute_quest: 0,
            world_time_hour: 0,
            world_time_hour_quest: 21,
            world_time_minute: 0,
            world_time_minute_quest: 0,
        }
    }
}

/// Root quest record. `QuestData::default()` is the canonical template new
/// records are seeded from; every call builds a fresh owned value, so
/// editing one instance can never leak into another.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct QuestData {
    #[serde(rename = "_ArenaDataList")]
    pub arena_data_list: ArenaData,
    #[serde(rename = "_BossZakoDataList")]
    pub boss_zako_data_list: BossZakoData,
    #[serde(rename = "_DataList")]
    pub data_list: DataList,
    #[serde(rename = "_IsRecommended")]
    pub is_recommended: bool,
    #[serde(rename = "_MessageAssetList")]
    pub message_asset_list: Vec<MessageAsset>,
    #[serde(rename = "_StreamQuestData")]
    pub stream_quest_data: StreamQuestData,
}

impl QuestData {
    pub fn quest_level(&self) -> u32 {
        self.data_list.quest_lv
    }

    /// Stage of the quest, resolved from the authoritative `_Stage._Value`.
    /// `None` when the record carries a field value outside the known set.
    pub fn stage(&self) -> Option<Stage> {
        Stage::from_field_value(self.data_list.stage.value)
    }

    /// Set the quest level and re-derive the rank label on every monster.
    ///
    /// The rank label is derived data; it must never go stale when the
    /// level changes after monsters were placed.
    pub fn set_quest_level(&mut self, level: u32) {
        self.data_list.quest_lv = level;
        let name = difficulty_rank_name(level);
        for monster in &mut self.boss_zako_data_list.main_target_data_list {
            monster.difficulty_rank_id.name.clone_from(&name);
        }
    }

    /// Move the quest to another stage. Rewrites every stage-typed field in
    /// the record and re-initializes each monster's spawn placement from
    /// the new stage's defaults.
    pub fn set_stage(&mut self, stage: Stage) {
        let stage_nv = NameValue::new(stage.code(), stage.field_value());

        self.data_list.stage = stage_nv.clone();
        self.boss_zako_data_list.field_id = FieldId::for_stage(stage);
        self.boss_zako_data_list.zako_layout_tag.field_id = FieldId::for_stage(stage);

        let stream = &mut self.stream_quest_data;
        stream.em_set_data.em_set_animal_tag.field_id = FieldId::for_stage(stage);
        stream.em_set_data.stage = stage_nv.clone();
        for env in &mut stream.set_environment_data_list {
            env.stage_type = stage_nv.clone();
        }

        let defaults = stage.spawn_defaults();
        for monster in &mut self.boss_zako_data_list.main_target_data_list {
            monster.init_pos = defaults.init_pos.to_string();
            monster.route_id = defaults.route_id();
        }
    }

    /// Append a monster seeded from the current quest level and stage
    /// spawn defaults.
    pub fn add_monster(&mut self) -> &mut MainTargetData {
        let mut monster = MainTargetData::for_quest_level(self.data_list.quest_lv);
        if let Some(stage) = self.stage() {
            let defaults = stage.spawn_defaults();
            monster.init_pos = defaults.init_pos.to_string();
            monster.route_id = defaults.route_id();
        }
        let list = &mut self.boss_zako_data_list.main_target_data_list;
        list.push(monster);
        list.last_mut().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_matches_the_engine_literals() {
        let quest = QuestData::default();
        assert_eq!(quest.data_list.quest_lv, 1);
        assert_eq!(quest.data_list.time_limit, 50);
        assert_eq!(quest.data_list.add_point, 198);
        assert_eq!(quest.data_list.version, 1);
        assert_eq!(quest.boss_zako_data_list.field_id.name, "st401");
        assert_eq!(quest.boss_zako_data_list.field_id.value, 1181994624);
        assert_eq!(quest.data_list.order_condition.order_hr, 21);
        assert_eq!(quest.stream_quest_data.world_time_hour_quest, 21);
        assert_eq!(quest.stream_quest_data.set_environment_data_list.len(), 1);
        assert!(quest.boss_zako_data_list.main_target_data_list.is_empty());
        assert!(quest.message_asset_list.is_empty());
    }

    #[test]
    fn factory_results_are_isolated() {
        let mut a = QuestData::default();
        a.data_list.time_limit = 15;
        a.add_monster().em_id = 42;

        let b = QuestData::default();
        assert_eq!(b.data_list.time_limit, 50);
        assert!(b.boss_zako_data_list.main_target_data_list.is_empty());
        assert_eq!(b, QuestData::default());
    }

    #[test]
    fn monster_rank_label_is_derived_from_the_level() {
        for level in 1..=9 {
            let monster = MainTargetData::for_quest_level(level);
            assert_eq!(monster.difficulty_rank_id.name, format!("★{level}"));
            // the id stays the nil placeholder; only the label is derived
            assert_eq!(monster.difficulty_rank_id.value, NIL_ID);
        }
        // out-of-range levels are accepted and stringified as-is
        assert_eq!(
            MainTargetData::for_quest_level(27).difficulty_rank_id.name,
            "★27"
        );
    }

    #[test]
    fn constant_sets_keep_their_engine_discriminants() {
        assert_eq!(QuestType::Hunting.value(), 0);
        assert_eq!(QuestType::Kill.value(), 1);
        assert_eq!(QuestType::Capture.value(), 2);
        assert_eq!(QuestType::Arena.value(), 5);
        assert_eq!(QuestType::BossRush.value(), 6);
        assert_eq!(QuestType::Special.value(), 7);
        assert_eq!(BossRushPopType::Beginning.value(), 0);
        assert_eq!(BossRushPopType::RemainHp.value(), 2);
        assert_eq!(BossRushPopType::HuntNumOrTime.value(), 4);
    }

    #[test]
    fn rank_pickers_offer_none_before_the_starred_levels() {
        let options = difficulty_rank_options();
        assert_eq!(options.first().map(String::as_str), Some(DIFFICULTY_RANK_NONE));
        assert_eq!(options.len(), 10);
        assert_eq!(options[1], "★1");
        assert_eq!(options[9], "★9");
    }

    #[test]
    fn monster_template_defaults_to_arena_placement() {
        let monster = MainTargetData::default();
        assert_eq!(monster.area_no, 255);
        assert_eq!(monster.init_pos, "(-326,-28,176)");
        assert_eq!(monster.route_id.name, "斗技场");
        assert_eq!(monster.layout_keep_id, -1);
        assert_eq!(monster.event_target_id, "INVALID");
    }

    #[test]
    fn set_quest_level_rederives_existing_rank_labels() {
        let mut quest = QuestData::default();
        quest.add_monster();
        quest.add_monster();
        quest.set_quest_level(7);

        assert_eq!(quest.quest_level(), 7);
        for monster in &quest.boss_zako_data_list.main_target_data_list {
            assert_eq!(monster.difficulty_rank_id.name, "★7");
        }
    }

    #[test]
    fn set_stage_rewrites_stage_fields_and_placement() {
        let mut quest = QuestData::default();
        quest.add_monster();
        quest.set_stage(Stage::St101);

        assert_eq!(quest.stage(), Some(Stage::St101));
        assert_eq!(quest.data_list.stage.name.as_deref(), Some("st101"));
        assert_eq!(quest.boss_zako_data_list.field_id.name, "st101");
        assert_eq!(quest.boss_zako_data_list.zako_layout_tag.field_id.name, "st101");
        assert_eq!(quest.stream_quest_data.em_set_data.stage.value, Stage::St101.field_value());
        assert_eq!(
            quest.stream_quest_data.set_environment_data_list[0].stage_type.value,
            Stage::St101.field_value()
        );

        let monster = &quest.boss_zako_data_list.main_target_data_list[0];
        assert_eq!(monster.init_pos, "(0,0,0)");
        assert_eq!(monster.route_id.name, "None");
        assert_eq!(monster.route_id.value, NIL_ID);
    }

    #[test]
    fn add_monster_uses_current_level_and_stage() {
        let mut quest = QuestData::default();
        quest.set_quest_level(3);
        let monster = quest.add_monster();
        assert_eq!(monster.difficulty_rank_id.name, "★3");
        assert_eq!(monster.init_pos, "(-326,-28,176)");
    }

    #[test]
    fn wire_format_keeps_exact_field_names() {
        let json = serde_json::to_value(QuestData::default()).unwrap();

        let data_list = json.get("_DataList").unwrap();
        assert_eq!(data_list.get("_QuestLv").unwrap(), 1);
        assert_eq!(data_list.get("_TimeLimit").unwrap(), 50);
        // the legacy shadow keys must be present and null
        assert!(data_list.get("_BossRushParams=").unwrap().is_null());
        assert!(data_list.get("_SubBossInfoArray=").unwrap().is_null());
        assert_eq!(
            data_list.pointer("/_Stage/_Name").unwrap(),
            "st401"
        );
        assert_eq!(
            json.pointer("/_BossZakoDataList/_FieldID/_Value").unwrap(),
            1181994624i64
        );
        assert_eq!(
            json.pointer("/_StreamQuestData/_SetLGuideMsgData/gaugeSpritNum")
                .unwrap(),
            0
        );

        let monster = serde_json::to_value(MainTargetData::for_quest_level(3)).unwrap();
        assert_eq!(monster.pointer("/_DifficultyRankId/Name").unwrap(), "★3");
        assert_eq!(monster.pointer("/_RouteID/_Value").unwrap(), "7ae19f9f-f315-4f16-cc4fc595f9f7c483");
    }

    #[test]
    fn template_round_trips_through_the_wire_format() {
        let quest = QuestData::default();
        let json = serde_json::to_string(&quest).unwrap();
        let back: QuestData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quest);
    }

    #[test]
    fn missing_fields_fall_back_to_the_template() {
        // records written by older editors may omit trailing fields
        let quest: QuestData = serde_json::from_str("{}").unwrap();
        assert_eq!(quest, QuestData::default());
    }
}

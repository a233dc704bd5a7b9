use crate::quest::RouteId;

/// The closed set of stages a quest can take place in. There is no dynamic
/// stage registration; the engine only understands these five field ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Arena (st401)
    St401,
    /// Windward Plains (st001)
    St001,
    /// Scarlet Forest (st101)
    St101,
    /// Oilwell Basin (st201)
    St201,
    /// Cliffside Caverns (st301)
    St301,
}

/// Display order used by stage pickers.
pub const STAGES: [Stage; 5] = [
    Stage::St401,
    Stage::St001,
    Stage::St101,
    Stage::St201,
    Stage::St301,
];

/// Canonical spawn placement for a stage: the initial position string and
/// the named route new monsters are attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnDefaults {
    pub init_pos: &'static str,
    pub route_name: &'static str,
    pub route_value: &'static str,
}

impl SpawnDefaults {
    pub fn route_id(&self) -> RouteId {
        RouteId {
            name: self.route_name.to_string(),
            value: self.route_value.to_string(),
        }
    }
}

const NO_ROUTE: &str = "00000000-0000-0000-0000-000000000000";

impl Stage {
    /// Engine code string (`"st401"` etc), serialized into `_Name` fields.
    pub fn code(&self) -> &'static str {
        match self {
            Stage::St401 => "st401",
            Stage::St001 => "st001",
            Stage::St101 => "st101",
            Stage::St201 => "st201",
            Stage::St301 => "st301",
        }
    }

    /// Human label used by stage pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::St401 => "Arena (st401)",
            Stage::St001 => "Windward Plains (st001)",
            Stage::St101 => "Scarlet Forest (st101)",
            Stage::St201 => "Oilwell Basin (st201)",
            Stage::St301 => "Cliffside Caverns (st301)",
        }
    }

    /// Serialized `_Value` of the stage field id.
    ///
    /// Only st401's value is attested by engine data; the other four are
    /// placeholders kept in this single table until dumped values land.
    pub fn field_value(&self) -> i64 {
        match self {
            Stage::St401 => 1181994624,
            Stage::St001 => 615040768,
            Stage::St101 => 833274880,
            Stage::St201 => 1009307648,
            Stage::St301 => 1094218752,
        }
    }

    /// Reverse lookup from a serialized field value. Unknown values yield
    /// `None` so callers can tell "no defaults available" apart from a
    /// zeroed override.
    pub fn from_field_value(value: i64) -> Option<Stage> {
        STAGES.into_iter().find(|s| s.field_value() == value)
    }

    pub fn from_code(code: &str) -> Option<Stage> {
        STAGES.into_iter().find(|s| s.code() == code)
    }

    pub fn spawn_defaults(&self) -> SpawnDefaults {
        match self {
            Stage::St401 => SpawnDefaults {
                init_pos: "(-326,-28,176)",
                route_name: "斗技场",
                route_value: "7ae19f9f-f315-4f16-cc4fc595f9f7c483",
            },
            _ => SpawnDefaults {
                init_pos: "(0,0,0)",
                route_name: "None",
                route_value: NO_ROUTE,
            },
        }
    }
}

//! Level catalog
//!
//! The ten hand-authored Minneapolis levels as static data. Level numbers are
//! 1-based; asking for a level past the end yields `None`, which the session
//! treats as victory.

use serde::{Deserialize, Serialize};

/// Number of playable levels
pub const LEVEL_COUNT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollectibleKind {
    #[default]
    Coin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Goomba,
}

/// Backdrop of a level, one per landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    Spoonbridge,
    FirstAvenue,
    StoneArch,
    MillCity,
    FoshayTower,
    StAnthonyFalls,
    GuthrieTheater,
    MaryTylerMoore,
    ChainOfLakes,
    SkywaySystem,
}

impl Background {
    pub const ALL: [Background; 10] = [
        Background::Spoonbridge,
        Background::FirstAvenue,
        Background::StoneArch,
        Background::MillCity,
        Background::FoshayTower,
        Background::StAnthonyFalls,
        Background::GuthrieTheater,
        Background::MaryTylerMoore,
        Background::ChainOfLakes,
        Background::SkywaySystem,
    ];

    /// Image the asset loader fetches for this backdrop
    pub fn asset_name(&self) -> &'static str {
        match self {
            Background::Spoonbridge => "spoonbridge_level_bg.png",
            Background::FirstAvenue => "first_avenue_level_bg.png",
            Background::StoneArch => "stone_arch_bridge_bg.png",
            Background::MillCity => "mill_city_ruins_bg.png",
            Background::FoshayTower => "foshay_tower_bg.png",
            Background::StAnthonyFalls => "st_anthony_falls_bg.png",
            Background::GuthrieTheater => "guthrie_theater_bg.png",
            Background::MaryTylerMoore => "mary_tyler_moore_bg.png",
            Background::ChainOfLakes => "chain_of_lakes_bg.png",
            Background::SkywaySystem => "skyway_system_bg.png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// 0xRRGGBB
    pub color: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectibleSpec {
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpec {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
}

/// Declarative description of one level
#[derive(Debug)]
pub struct LevelDef {
    pub name: &'static str,
    pub background: Background,
    pub platforms: &'static [PlatformSpec],
    pub collectibles: &'static [CollectibleSpec],
    pub enemies: &'static [EnemySpec],
}

/// Catalog entry for `level` (1-based), or `None` past the last level
pub fn level(level: u32) -> Option<&'static LevelDef> {
    let index = level.checked_sub(1)?;
    LEVELS.get(index as usize)
}

const fn plat(x: f32, y: f32, width: f32, height: f32, color: u32) -> PlatformSpec {
    PlatformSpec {
        x,
        y,
        width,
        height,
        color,
    }
}

const fn coin(x: f32, y: f32) -> CollectibleSpec {
    CollectibleSpec {
        x,
        y,
        kind: CollectibleKind::Coin,
    }
}

const fn goomba(x: f32, y: f32) -> EnemySpec {
    EnemySpec {
        x,
        y,
        kind: EnemyKind::Goomba,
    }
}

const BROWN: u32 = 0x8B4513;
const CLUB_BLACK: u32 = 0x333333;
const LIMESTONE: u32 = 0x888888;
const RUIN_BROWN: u32 = 0x654321;
const SILVER: u32 = 0xC0C0C0;
const RIVER_BLUE: u32 = 0x4682B4;
const THEATER_PURPLE: u32 = 0x800080;
const SIDEWALK_GRAY: u32 = 0x696969;
const FOREST_GREEN: u32 = 0x228B22;
const SKYWAY_BLUE: u32 = 0x4169E1;

pub static LEVELS: [LevelDef; LEVEL_COUNT as usize] = [
    LevelDef {
        name: "Spoonbridge and Cherry",
        background: Background::Spoonbridge,
        platforms: &[
            plat(0.0, 350.0, 200.0, 50.0, BROWN), // ground
            plat(250.0, 300.0, 100.0, 20.0, BROWN),
            plat(400.0, 250.0, 100.0, 20.0, BROWN),
            plat(550.0, 200.0, 100.0, 20.0, BROWN),
            plat(700.0, 350.0, 100.0, 50.0, BROWN), // goal
        ],
        collectibles: &[
            coin(300.0, 270.0),
            coin(450.0, 220.0),
            coin(600.0, 170.0),
            coin(750.0, 320.0),
        ],
        enemies: &[goomba(300.0, 280.0), goomba(500.0, 180.0)],
    },
    LevelDef {
        name: "First Avenue",
        background: Background::FirstAvenue,
        platforms: &[
            plat(0.0, 350.0, 150.0, 50.0, CLUB_BLACK),
            plat(200.0, 320.0, 80.0, 20.0, CLUB_BLACK), // stage
            plat(350.0, 280.0, 80.0, 20.0, CLUB_BLACK), // speakers
            plat(500.0, 240.0, 80.0, 20.0, CLUB_BLACK), // light rig
            plat(650.0, 200.0, 80.0, 20.0, CLUB_BLACK), // upper stage
            plat(750.0, 350.0, 50.0, 50.0, CLUB_BLACK),
        ],
        collectibles: &[
            coin(240.0, 290.0),
            coin(390.0, 250.0),
            coin(540.0, 210.0),
            coin(690.0, 170.0),
            coin(770.0, 320.0),
        ],
        enemies: &[goomba(250.0, 300.0), goomba(450.0, 220.0), goomba(600.0, 180.0)],
    },
    LevelDef {
        name: "Stone Arch Bridge",
        background: Background::StoneArch,
        platforms: &[
            plat(0.0, 350.0, 120.0, 50.0, LIMESTONE),
            plat(150.0, 320.0, 80.0, 20.0, LIMESTONE),
            plat(280.0, 300.0, 80.0, 20.0, LIMESTONE),
            plat(410.0, 280.0, 80.0, 20.0, LIMESTONE),
            plat(540.0, 300.0, 80.0, 20.0, LIMESTONE),
            plat(670.0, 320.0, 80.0, 20.0, LIMESTONE),
            plat(750.0, 350.0, 50.0, 50.0, LIMESTONE),
        ],
        collectibles: &[
            coin(190.0, 290.0),
            coin(320.0, 270.0),
            coin(450.0, 250.0),
            coin(580.0, 270.0),
            coin(710.0, 290.0),
            coin(770.0, 320.0),
        ],
        enemies: &[goomba(200.0, 300.0), goomba(450.0, 260.0), goomba(650.0, 300.0)],
    },
    LevelDef {
        name: "Mill City Ruins",
        background: Background::MillCity,
        platforms: &[
            plat(0.0, 350.0, 120.0, 50.0, RUIN_BROWN),
            plat(150.0, 320.0, 80.0, 20.0, RUIN_BROWN),
            plat(280.0, 280.0, 80.0, 20.0, RUIN_BROWN), // conveyor
            plat(410.0, 240.0, 80.0, 20.0, RUIN_BROWN),
            plat(540.0, 300.0, 80.0, 20.0, RUIN_BROWN), // mill wheel
            plat(670.0, 330.0, 80.0, 20.0, RUIN_BROWN),
            plat(750.0, 350.0, 50.0, 50.0, RUIN_BROWN),
        ],
        collectibles: &[
            coin(190.0, 290.0),
            coin(320.0, 250.0),
            coin(450.0, 210.0),
            coin(580.0, 270.0),
            coin(710.0, 300.0),
            coin(770.0, 320.0),
        ],
        enemies: &[
            goomba(200.0, 300.0),
            goomba(350.0, 260.0),
            goomba(590.0, 280.0),
            goomba(720.0, 310.0),
        ],
    },
    LevelDef {
        name: "Foshay Tower",
        background: Background::FoshayTower,
        platforms: &[
            plat(0.0, 350.0, 150.0, 50.0, SILVER),
            plat(180.0, 320.0, 80.0, 20.0, SILVER), // floor 1
            plat(320.0, 290.0, 80.0, 20.0, SILVER),
            plat(180.0, 260.0, 80.0, 20.0, SILVER),
            plat(320.0, 230.0, 80.0, 20.0, SILVER),
            plat(180.0, 200.0, 80.0, 20.0, SILVER), // floor 5
            plat(450.0, 180.0, 120.0, 20.0, SILVER), // observation deck
            plat(720.0, 350.0, 80.0, 50.0, SILVER),
        ],
        collectibles: &[
            coin(220.0, 290.0),
            coin(360.0, 260.0),
            coin(220.0, 230.0),
            coin(360.0, 200.0),
            coin(220.0, 170.0),
            coin(510.0, 150.0),
            coin(760.0, 320.0),
        ],
        enemies: &[
            goomba(230.0, 300.0),
            goomba(370.0, 270.0),
            goomba(230.0, 240.0),
            goomba(520.0, 160.0),
        ],
    },
    LevelDef {
        name: "St. Anthony Falls",
        background: Background::StAnthonyFalls,
        platforms: &[
            plat(0.0, 350.0, 150.0, 50.0, RIVER_BLUE),
            plat(200.0, 320.0, 80.0, 20.0, RIVER_BLUE),
            plat(350.0, 280.0, 80.0, 20.0, RIVER_BLUE),
            plat(200.0, 240.0, 80.0, 20.0, RIVER_BLUE),
            plat(480.0, 200.0, 100.0, 20.0, RIVER_BLUE), // falls
            plat(620.0, 260.0, 80.0, 20.0, RIVER_BLUE),
            plat(720.0, 350.0, 80.0, 50.0, RIVER_BLUE),
        ],
        collectibles: &[
            coin(240.0, 290.0),
            coin(390.0, 250.0),
            coin(240.0, 210.0),
            coin(530.0, 170.0),
            coin(660.0, 230.0),
            coin(760.0, 320.0),
        ],
        enemies: &[
            goomba(250.0, 300.0),
            goomba(400.0, 260.0),
            goomba(540.0, 180.0),
            goomba(670.0, 240.0),
        ],
    },
    LevelDef {
        name: "Guthrie Theater",
        background: Background::GuthrieTheater,
        platforms: &[
            plat(0.0, 350.0, 120.0, 50.0, THEATER_PURPLE),
            plat(170.0, 320.0, 100.0, 20.0, THEATER_PURPLE), // stage left
            plat(320.0, 300.0, 120.0, 20.0, THEATER_PURPLE), // main stage
            plat(480.0, 280.0, 100.0, 20.0, THEATER_PURPLE), // stage right
            plat(620.0, 240.0, 80.0, 20.0, THEATER_PURPLE), // balcony
            plat(720.0, 350.0, 80.0, 50.0, THEATER_PURPLE),
        ],
        collectibles: &[
            coin(220.0, 290.0),
            coin(380.0, 270.0),
            coin(530.0, 250.0),
            coin(660.0, 210.0),
            coin(760.0, 320.0),
        ],
        enemies: &[
            goomba(230.0, 300.0),
            goomba(390.0, 280.0),
            goomba(540.0, 260.0),
            goomba(670.0, 220.0),
        ],
    },
    LevelDef {
        name: "Mary Tyler Moore Statue",
        background: Background::MaryTylerMoore,
        platforms: &[
            plat(0.0, 350.0, 140.0, 50.0, SIDEWALK_GRAY),
            plat(190.0, 320.0, 100.0, 20.0, SIDEWALK_GRAY),
            plat(340.0, 290.0, 100.0, 20.0, SIDEWALK_GRAY), // storefront
            plat(490.0, 260.0, 100.0, 20.0, SIDEWALK_GRAY),
            plat(640.0, 300.0, 80.0, 20.0, SIDEWALK_GRAY),
            plat(720.0, 350.0, 80.0, 50.0, SIDEWALK_GRAY),
        ],
        collectibles: &[
            coin(240.0, 290.0),
            coin(390.0, 260.0),
            coin(540.0, 230.0),
            coin(680.0, 270.0),
            coin(760.0, 320.0),
        ],
        enemies: &[
            goomba(250.0, 300.0),
            goomba(400.0, 270.0),
            goomba(550.0, 240.0),
            goomba(690.0, 280.0),
        ],
    },
    LevelDef {
        name: "Chain of Lakes",
        background: Background::ChainOfLakes,
        platforms: &[
            plat(0.0, 350.0, 120.0, 50.0, FOREST_GREEN), // shore
            plat(170.0, 330.0, 80.0, 20.0, FOREST_GREEN),
            plat(300.0, 310.0, 100.0, 20.0, FOREST_GREEN), // dock
            plat(450.0, 290.0, 80.0, 20.0, FOREST_GREEN),
            plat(580.0, 270.0, 100.0, 20.0, FOREST_GREEN), // bridge
            plat(720.0, 350.0, 80.0, 50.0, FOREST_GREEN),
        ],
        collectibles: &[
            coin(210.0, 300.0),
            coin(350.0, 280.0),
            coin(490.0, 260.0),
            coin(630.0, 240.0),
            coin(760.0, 320.0),
        ],
        enemies: &[
            goomba(220.0, 310.0),
            goomba(360.0, 290.0),
            goomba(500.0, 270.0),
            goomba(640.0, 250.0),
        ],
    },
    LevelDef {
        name: "Skyway System",
        background: Background::SkywaySystem,
        platforms: &[
            plat(0.0, 350.0, 100.0, 50.0, SKYWAY_BLUE),
            plat(150.0, 320.0, 80.0, 20.0, SKYWAY_BLUE),
            plat(280.0, 290.0, 80.0, 20.0, SKYWAY_BLUE),
            plat(410.0, 260.0, 80.0, 20.0, SKYWAY_BLUE),
            plat(540.0, 230.0, 80.0, 20.0, SKYWAY_BLUE),
            plat(670.0, 200.0, 80.0, 20.0, SKYWAY_BLUE),
            plat(720.0, 350.0, 80.0, 50.0, SKYWAY_BLUE), // victory platform
        ],
        collectibles: &[
            coin(190.0, 290.0),
            coin(320.0, 260.0),
            coin(450.0, 230.0),
            coin(580.0, 200.0),
            coin(710.0, 170.0),
            coin(760.0, 320.0),
        ],
        enemies: &[
            goomba(200.0, 300.0),
            goomba(330.0, 270.0),
            goomba(460.0, 240.0),
            goomba(590.0, 210.0),
            goomba(720.0, 180.0),
        ],
    },
];

//! Battlesnake wire types.
//!
//! Passive records mirroring the public Battlesnake game API schema
//! (<https://docs.battlesnake.com/api>). They exist only as decode targets
//! for incoming requests and encode sources for responses; nothing here is
//! retained past a single request.
//!
//! Every struct decodes leniently: missing fields fall back to their
//! zero-values, so a bare `{}` is a valid `GameState`.

use serde::{Deserialize, Serialize};

/// A coordinate on the game board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Customizable appearance of a snake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customizations {
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// A snake on the game board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Battlesnake {
    pub id: String,
    pub name: String,
    pub health: i32,
    pub body: Vec<Coord>,
    pub head: Coord,
    pub length: i32,
    pub latency: String,
    pub shout: String,
    pub squad: String,
    pub customizations: Customizations,
}

/// The game board: dimensions plus food, hazard, and snake positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    pub height: i32,
    pub width: i32,
    pub food: Vec<Coord>,
    pub hazards: Vec<Coord>,
    pub snakes: Vec<Battlesnake>,
}

/// Settings specific to royale games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoyaleSettings {
    pub shrink_every_n_turns: i32,
}

/// Settings specific to squad games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SquadSettings {
    pub allow_body_collisions: bool,
    pub shared_elimination: bool,
    pub shared_health: bool,
    pub shared_length: bool,
}

/// All settings for a game ruleset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesetSettings {
    pub food_spawn_chance: i32,
    pub minimum_food: i32,
    pub hazard_damage_per_turn: i32,
    pub hazard_map: String,
    pub hazard_map_author: String,
    pub royale: RoyaleSettings,
    pub squad: SquadSettings,
}

/// The ruleset a game is played under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub name: String,
    pub version: String,
    pub settings: RulesetSettings,
}

/// A Battlesnake game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub ruleset: Ruleset,
    pub map: String,
    pub source: String,
    pub timeout: i32,
}

/// Full state of the game at a given turn, as posted to `/start`, `/move`,
/// and `/end`. `you` is the snake this server plays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub game: Game,
    pub turn: i32,
    pub board: Board,
    pub you: Battlesnake,
}

/// Static self-description served at `GET /`.
///
/// The `apiversion` field is overwritten with the crate's
/// [`API_VERSION`](crate::API_VERSION) when the server is constructed,
/// whatever the caller put in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoResponse {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub version: String,
}

/// The move chosen for one turn, returned from `POST /move`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveResponse {
    /// Direction to move: `"up"`, `"down"`, `"left"`, or `"right"`.
    #[serde(rename = "move")]
    pub direction: String,
    /// Optional taunt shown to other players. Empty means no shout.
    pub shout: String,
}

impl MoveResponse {
    /// A move with no shout.
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            shout: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_decodes_to_zero_values() {
        let state: GameState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, GameState::default());
        assert_eq!(state.turn, 0);
        assert!(state.game.id.is_empty());
        assert!(state.board.snakes.is_empty());
    }

    #[test]
    fn test_game_state_decodes_full_schema() {
        let body = serde_json::json!({
            "game": {
                "id": "game-1",
                "ruleset": {
                    "name": "royale",
                    "version": "v1.2.3",
                    "settings": {
                        "foodSpawnChance": 15,
                        "minimumFood": 1,
                        "hazardDamagePerTurn": 14,
                        "hazardMap": "hz_spiral",
                        "hazardMapAuthor": "altersaddle",
                        "royale": { "shrinkEveryNTurns": 25 },
                        "squad": {
                            "allowBodyCollisions": true,
                            "sharedElimination": true,
                            "sharedHealth": false,
                            "sharedLength": false
                        }
                    }
                },
                "map": "royale",
                "source": "league",
                "timeout": 500
            },
            "turn": 42,
            "board": {
                "height": 11,
                "width": 11,
                "food": [{ "x": 5, "y": 5 }],
                "hazards": [{ "x": 0, "y": 0 }],
                "snakes": []
            },
            "you": {
                "id": "snake-1",
                "name": "bob",
                "health": 90,
                "body": [{ "x": 1, "y": 1 }, { "x": 1, "y": 2 }],
                "head": { "x": 1, "y": 1 },
                "length": 2,
                "latency": "52",
                "shout": "",
                "squad": "",
                "customizations": { "color": "#ff0000", "head": "pixel", "tail": "pixel" }
            }
        });

        let state: GameState = serde_json::from_value(body).unwrap();
        assert_eq!(state.game.id, "game-1");
        assert_eq!(state.game.ruleset.settings.food_spawn_chance, 15);
        assert_eq!(state.game.ruleset.settings.royale.shrink_every_n_turns, 25);
        assert!(state.game.ruleset.settings.squad.allow_body_collisions);
        assert_eq!(state.turn, 42);
        assert_eq!(state.board.food, vec![Coord { x: 5, y: 5 }]);
        assert_eq!(state.you.head, Coord { x: 1, y: 1 });
        assert_eq!(state.you.length, 2);
    }

    #[test]
    fn test_move_response_wire_field_is_move() {
        let resp = MoveResponse {
            direction: "left".into(),
            shout: "coming through".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"move":"left","shout":"coming through"}"#);
    }

    #[test]
    fn test_info_response_field_names() {
        let info = InfoResponse {
            apiversion: "1".into(),
            author: "foo".into(),
            color: "#000000".into(),
            head: "default".into(),
            tail: "default".into(),
            version: "9.9".into(),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["apiversion"], "1");
        assert_eq!(value["author"], "foo");
        assert_eq!(value["color"], "#000000");
    }
}

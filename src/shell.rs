//! Menu shell
//!
//! The original screen flow - main menu, mode/difficulty pick, name entry,
//! avatar pick, settings, how-to-play, pause and game-over - modeled as an
//! explicit tagged union with one transition function. The shell owns no
//! simulation state: it turns navigation intents into `ShellCommand`s for
//! the layer that owns the `MatchSession`, which makes every transition
//! testable without a display.

use crate::profile::{AVATAR_COUNT, MAX_NAME_LEN, PlayerProfile};
use crate::settings::Settings;
use crate::sim::{Difficulty, MatchConfig};

/// Entries on the main menu, in display order
pub const MAIN_MENU_ITEMS: [&str; 4] = ["Start New Game", "How to Play", "Settings", "Exit"];

/// Which player a name/avatar screen is collecting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    Single,
    MultiP1,
    MultiP2,
}

/// The current screen. One variant per screen, with the screen's own
/// cursor/buffer carried inside the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    MainMenu { cursor: usize },
    ModeSelect { cursor: usize },
    DifficultySelect { cursor: usize },
    NameInput { stage: SetupStage, buffer: String },
    AvatarSelect { stage: SetupStage, cursor: usize },
    HowToPlay,
    SettingsMenu { cursor: usize },
    Playing,
    Paused,
    GameOver,
}

/// A discrete navigation intent from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Up,
    Down,
    Left,
    Right,
    Accept,
    Back,
    /// The dedicated back-to-menu key on pause/game-over screens
    Menu,
    Char(char),
    Backspace,
}

/// What the shell asks its owner to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellCommand {
    /// Build a session from this config and start the music
    StartMatch(MatchConfig),
    PauseMatch,
    ResumeMatch,
    /// Drop the current session and stop the music
    AbandonMatch,
    /// Exit the program
    Quit,
}

/// Menu state machine plus the selections it accumulates on the way to a
/// match: settings, player identities, mode and difficulty.
pub struct Shell {
    pub screen: Screen,
    pub settings: Settings,
    pub players: [PlayerProfile; 2],
    difficulty: Difficulty,
    single_player: bool,
}

impl Shell {
    pub fn new(settings: Settings) -> Self {
        Self {
            screen: Screen::MainMenu { cursor: 0 },
            settings,
            players: [PlayerProfile::default_for(1), PlayerProfile::default_for(2)],
            difficulty: Difficulty::default(),
            single_player: true,
        }
    }

    /// The difficulty the next single-player match will use
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Called by the session owner when the match reaches its outcome
    pub fn match_ended(&mut self) {
        if matches!(self.screen, Screen::Playing | Screen::Paused) {
            self.screen = Screen::GameOver;
        }
    }

    /// Feed one navigation intent through the state machine
    pub fn handle(&mut self, intent: NavIntent) -> Option<ShellCommand> {
        match &mut self.screen {
            Screen::MainMenu { cursor } => match intent {
                NavIntent::Up => {
                    *cursor = wrap_dec(*cursor, MAIN_MENU_ITEMS.len());
                    None
                }
                NavIntent::Down => {
                    *cursor = wrap_inc(*cursor, MAIN_MENU_ITEMS.len());
                    None
                }
                NavIntent::Accept => match *cursor {
                    0 => {
                        self.screen = Screen::ModeSelect { cursor: 0 };
                        None
                    }
                    1 => {
                        self.screen = Screen::HowToPlay;
                        None
                    }
                    2 => {
                        self.screen = Screen::SettingsMenu { cursor: 0 };
                        None
                    }
                    _ => Some(ShellCommand::Quit),
                },
                _ => None,
            },

            Screen::ModeSelect { cursor } => match intent {
                NavIntent::Up | NavIntent::Down => {
                    *cursor = 1 - *cursor;
                    None
                }
                NavIntent::Accept => {
                    self.single_player = *cursor == 0;
                    if self.single_player {
                        self.screen = Screen::DifficultySelect {
                            cursor: Difficulty::ALL
                                .iter()
                                .position(|&d| d == self.difficulty)
                                .unwrap_or(1),
                        };
                    } else {
                        self.screen = Screen::NameInput {
                            stage: SetupStage::MultiP1,
                            buffer: String::new(),
                        };
                    }
                    None
                }
                NavIntent::Back => {
                    self.screen = Screen::MainMenu { cursor: 0 };
                    None
                }
                _ => None,
            },

            Screen::DifficultySelect { cursor } => match intent {
                NavIntent::Up => {
                    *cursor = wrap_dec(*cursor, Difficulty::ALL.len());
                    None
                }
                NavIntent::Down => {
                    *cursor = wrap_inc(*cursor, Difficulty::ALL.len());
                    None
                }
                NavIntent::Accept => {
                    self.difficulty = Difficulty::ALL[*cursor];
                    self.screen = Screen::NameInput {
                        stage: SetupStage::Single,
                        buffer: String::new(),
                    };
                    None
                }
                NavIntent::Back => {
                    self.screen = Screen::ModeSelect { cursor: 0 };
                    None
                }
                _ => None,
            },

            Screen::NameInput { stage, buffer } => match intent {
                NavIntent::Char(c) => {
                    if (' '..='~').contains(&c) && buffer.chars().count() < MAX_NAME_LEN {
                        buffer.push(c);
                    }
                    None
                }
                NavIntent::Backspace => {
                    buffer.pop();
                    None
                }
                NavIntent::Accept => {
                    let stage = *stage;
                    let typed = buffer.clone();
                    match stage {
                        SetupStage::Single | SetupStage::MultiP1 => {
                            self.players[0].set_name(&typed, 1);
                            self.screen = Screen::AvatarSelect {
                                stage,
                                cursor: self.players[0].avatar,
                            };
                        }
                        SetupStage::MultiP2 => {
                            self.players[1].set_name(&typed, 2);
                            self.screen = Screen::AvatarSelect {
                                stage,
                                cursor: self.players[1].avatar,
                            };
                        }
                    }
                    None
                }
                NavIntent::Back => {
                    let stage = *stage;
                    self.screen = match stage {
                        SetupStage::Single => Screen::DifficultySelect {
                            cursor: Difficulty::ALL
                                .iter()
                                .position(|&d| d == self.difficulty)
                                .unwrap_or(1),
                        },
                        SetupStage::MultiP1 | SetupStage::MultiP2 => {
                            Screen::ModeSelect { cursor: 1 }
                        }
                    };
                    None
                }
                _ => None,
            },

            Screen::AvatarSelect { stage, cursor } => match intent {
                NavIntent::Left => {
                    *cursor = wrap_dec(*cursor, AVATAR_COUNT);
                    None
                }
                NavIntent::Right => {
                    *cursor = wrap_inc(*cursor, AVATAR_COUNT);
                    None
                }
                NavIntent::Accept => {
                    let (stage, cursor) = (*stage, *cursor);
                    match stage {
                        SetupStage::Single => {
                            self.players[0].avatar = cursor;
                            self.players[1] = PlayerProfile::for_ai(self.difficulty);
                            self.screen = Screen::Playing;
                            Some(ShellCommand::StartMatch(self.match_config()))
                        }
                        SetupStage::MultiP1 => {
                            self.players[0].avatar = cursor;
                            self.screen = Screen::NameInput {
                                stage: SetupStage::MultiP2,
                                buffer: String::new(),
                            };
                            None
                        }
                        SetupStage::MultiP2 => {
                            self.players[1].avatar = cursor;
                            self.screen = Screen::Playing;
                            Some(ShellCommand::StartMatch(self.match_config()))
                        }
                    }
                }
                NavIntent::Back => {
                    let stage = *stage;
                    self.screen = Screen::NameInput {
                        stage,
                        buffer: String::new(),
                    };
                    None
                }
                _ => None,
            },

            Screen::HowToPlay => match intent {
                NavIntent::Back => {
                    self.screen = Screen::MainMenu { cursor: 0 };
                    None
                }
                _ => None,
            },

            Screen::SettingsMenu { cursor } => match intent {
                NavIntent::Up => {
                    *cursor = wrap_dec(*cursor, 4);
                    None
                }
                NavIntent::Down => {
                    *cursor = wrap_inc(*cursor, 4);
                    None
                }
                NavIntent::Left => {
                    match *cursor {
                        0 => self.settings.game_time = self.settings.game_time.prev(),
                        1 => self.settings.max_score = self.settings.max_score.prev(),
                        2 => self.settings.theme = self.settings.theme.prev(),
                        _ => {}
                    }
                    None
                }
                NavIntent::Right => {
                    match *cursor {
                        0 => self.settings.game_time = self.settings.game_time.next(),
                        1 => self.settings.max_score = self.settings.max_score.next(),
                        2 => self.settings.theme = self.settings.theme.next(),
                        _ => {}
                    }
                    None
                }
                NavIntent::Accept if *cursor == 3 => {
                    self.screen = Screen::MainMenu { cursor: 0 };
                    None
                }
                NavIntent::Back => {
                    self.screen = Screen::MainMenu { cursor: 0 };
                    None
                }
                _ => None,
            },

            Screen::Playing => match intent {
                NavIntent::Back => {
                    self.screen = Screen::Paused;
                    Some(ShellCommand::PauseMatch)
                }
                _ => None,
            },

            Screen::Paused => match intent {
                NavIntent::Back => {
                    self.screen = Screen::Playing;
                    Some(ShellCommand::ResumeMatch)
                }
                NavIntent::Menu => {
                    self.screen = Screen::MainMenu { cursor: 0 };
                    Some(ShellCommand::AbandonMatch)
                }
                _ => None,
            },

            Screen::GameOver => match intent {
                NavIntent::Menu => {
                    self.screen = Screen::MainMenu { cursor: 0 };
                    Some(ShellCommand::AbandonMatch)
                }
                _ => None,
            },
        }
    }

    fn match_config(&self) -> MatchConfig {
        self.settings
            .match_config(self.single_player, self.difficulty)
    }
}

fn wrap_inc(cursor: usize, len: usize) -> usize {
    (cursor + 1) % len
}

fn wrap_dec(cursor: usize, len: usize) -> usize {
    (cursor + len - 1) % len
}

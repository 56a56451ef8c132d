pub const CONFIG_FILE: &str = "Config.toml";
pub const DEFAULT_API_ROOT: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2409-ghp-et-web-pt";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

pub const PAGE_TITLE: &str = "Puppy Bowl";
pub const STYLESHEET_PATH: &str = "/assets/style.css";

// container ids the views render into
pub const ROSTER_CONTAINER_ID: &str = "puppy-container";
pub const DETAIL_CONTAINER_ID: &str = "single-player-container";
pub const NEW_PLAYER_FORM_ID: &str = "new-player-form";

pub const NAME_INPUT_ID: &str = "playerNameInput";
pub const BREED_INPUT_ID: &str = "playerBreedInput";
pub const IMAGE_URL_INPUT_ID: &str = "imageUrlInput";

pub const NO_PLAYERS_MESSAGE: &str = "No players on the roster yet.";
pub const UNASSIGNED_TEAM: &str = "Unassigned";

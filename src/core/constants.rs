// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS, one simulation step per frame
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp after pause/lag

// Terminal input (no key-release events without keyboard enhancement)
pub const INPUT_HOLD_TICKS: u32 = 12; // ~200ms, bridges key-repeat gaps
pub const TRIGGER_HOLD_TICKS: u32 = 40; // ~640ms, outlasts the key-repeat delay

// World geometry (world units, y grows downward)
pub const WATER_Y: f64 = 450.0;
pub const VIEWPORT_WIDTH: f64 = 1000.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;
pub const PLAYER_START_X: f64 = 200.0;
pub const PLAYER_MIN_X: f64 = 50.0;
pub const PLAYER_MAX_X: f64 = 10_000.0;

// Rowing
pub const ROW_ACCELERATION: f64 = 0.2;
pub const ROW_FRICTION: f64 = 0.95;
pub const BOAT_SPEED_PER_TIER: f64 = 0.1;
pub const MOVING_STOP_VELOCITY: f64 = 0.1;
pub const CAMERA_SMOOTHING: f64 = 0.1;

// Casting
pub const CAST_OFFSET_X: f64 = 50.0;
pub const CAST_OFFSET_Y: f64 = -60.0;
pub const CAST_VELOCITY_X_MIN: f64 = 2.0;
pub const CAST_VELOCITY_X_RANGE: f64 = 1.5;
pub const CAST_VELOCITY_Y_MIN: f64 = -4.0;
pub const CAST_VELOCITY_Y_RANGE: f64 = 1.5;
pub const BOBBER_GRAVITY: f64 = 0.2;

// Bite timing (in ticks)
pub const BITE_DELAY_BASE_TICKS: f64 = 100.0;
pub const BITE_DELAY_RANGE_TICKS: f64 = 200.0;
pub const BAIT_SPEED_PER_TIER: f64 = 30.0;
pub const BITE_WINDOW_TICKS: f64 = 60.0;

// Fish selection (checked in this order, first hit wins)
pub const MYTHICAL_CHANCE: f64 = 0.05;
pub const EXOTIC_CHANCE: f64 = 0.15;
pub const PREMIUM_CHANCE: f64 = 0.4;
pub const MYTHICAL_MIN_ROD_TIER: u32 = 3;
pub const EXOTIC_MIN_ROD_TIER: u32 = 2;
pub const PREMIUM_MIN_ROD_TIER: u32 = 2;

// Particles
pub const PARTICLE_GRAVITY: f64 = 0.2;
pub const PARTICLE_LIFE_DECAY: f64 = 0.02;
pub const PARTICLE_JITTER_X: f64 = 4.0;
pub const PARTICLE_LIFT_MIN: f64 = 1.0;
pub const PARTICLE_LIFT_RANGE: f64 = 3.0;
pub const PARTICLE_MIN_SIZE: f64 = 1.0;
pub const PARTICLE_MAX_SIZE: f64 = 4.0;
pub const LANDING_SPLASH_COUNT: usize = 8;
pub const ROWING_SPLASH_COUNT: usize = 5;
pub const ROWING_SPLASH_CHANCE: f64 = 0.1;
pub const ROWING_SPLASH_OFFSET_X: f64 = 40.0;

// Shop
pub const SHOP_RANGE_X: f64 = 150.0;
pub const STARTING_MONEY: u64 = 0;

// Lore text
pub const LORE_PENDING_TEXT: &str = "The wind whispers...";
pub const LORE_UNCONFIGURED_TEXT: &str = "The river holds many secrets...";
pub const LORE_FAILED_TEXT: &str = "The scales shimmer with an unknown energy.";
pub const LORE_EMPTY_TEXT: &str = "A legendary catch!";
pub const CHAT_UNCONFIGURED_TEXT: &str = "...";
pub const CHAT_FAILED_TEXT: &str = "Not much biting today, eh?";
pub const CHAT_EMPTY_TEXT: &str = "Take a look at my wares.";
pub const LORE_DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const LORE_DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const LORE_DEFAULT_TIMEOUT_MS: u64 = 8000;

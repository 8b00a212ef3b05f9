//! Deterministic avatar identity generation.
//!
//! Every person in the clinic UI gets a stable visual identity derived from
//! their display name alone: a numeric seed that parameterizes an external
//! DiceBear rendering, and an initials string used as the fallback badge when
//! the remote image cannot be loaded. All derivations are pure functions of
//! the name, so the same person renders identically on every page and every
//! visit, with nothing persisted.

use std::fmt;

/// External avatar rendering endpoint (DiceBear "thumbs" style).
///
/// The full request URL is determined entirely by the seed and the requested
/// pixel size, so previously shared or cached URLs stay valid as long as the
/// seed derivation is unchanged.
const AVATAR_ENDPOINT: &str = "https://api.dicebear.com/9.x/thumbs/svg";

/// Clinic staff shown on the dashboard. Indexed lookups wrap, so callers may
/// hand us any integer (rotation counters, list offsets) without bounds
/// checking on their side.
pub const STAFF_ROSTER: &[&str] = &[
    "Dr. Carlos Rodríguez",
    "Dra. María González",
    "Ana López",
    "Luis Fernández",
    "Sofía Ramírez",
];

// =============================================================================
// AvatarSize - display/resolution tiers
// =============================================================================

/// Avatar display tier. Maps to both the rendered container dimension and the
/// resolution requested from the remote service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarSize::Small => "small",
            AvatarSize::Medium => "medium",
            AvatarSize::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "small" => AvatarSize::Small,
            "large" => AvatarSize::Large,
            _ => AvatarSize::Medium,
        }
    }

    /// Pixel dimension for both the container and the requested image.
    pub fn pixels(&self) -> u32 {
        match self {
            AvatarSize::Small => 32,
            AvatarSize::Medium => 48,
            AvatarSize::Large => 64,
        }
    }

    /// CSS class applied to the avatar container.
    pub fn css_class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar-sm",
            AvatarSize::Medium => "avatar-md",
            AvatarSize::Large => "avatar-lg",
        }
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Derivations
// =============================================================================

/// Derive the identity seed for a display name.
///
/// Rolling hash over the name's Unicode code points:
/// `acc = c + ((acc << 5) - acc)` (i.e. `acc * 31 + c`) in wrapping 32-bit
/// signed arithmetic, then the absolute value of the final accumulator.
/// Wrapping is part of the contract - seeds must match URLs already cached
/// or shared from other clients, which computed them with two's-complement
/// overflow.
///
/// Not a uniqueness or security identifier; collisions between different
/// names are fine, only stability per name matters.
pub fn identity_seed(name: &str) -> u32 {
    let mut acc: i32 = 0;
    for c in name.chars() {
        acc = (c as i32).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc));
    }
    acc.unsigned_abs()
}

/// Derive the fallback initials for a display name.
///
/// First character of each whitespace-separated token, uppercased, at most
/// two characters. Empty names yield an empty string, single-word names a
/// single character.
pub fn initials(name: &str) -> String {
    let first: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .take(2)
        .collect();
    // Uppercase before truncating: some uppercasings expand (ß -> SS) and the
    // badge holds two characters at most.
    first.to_uppercase().chars().take(2).collect()
}

/// Build the remote image URL for a display name at the given size.
///
/// Pure function of its inputs - repeated calls return byte-identical URLs.
pub fn avatar_url(name: &str, size: AvatarSize) -> String {
    format!(
        "{}?seed={}&size={}&backgroundColor=transparent",
        AVATAR_ENDPOINT,
        identity_seed(name),
        size.pixels()
    )
}

/// Look up a staff member by wrapped index.
///
/// Uses a non-negative modulo so negative indices stay in range instead of
/// panicking or going out of bounds.
pub fn staff_name(index: i64) -> &'static str {
    let len = STAFF_ROSTER.len() as i64;
    STAFF_ROSTER[index.rem_euclid(len) as usize]
}

// =============================================================================
// AvatarIdentity - the derived bundle
// =============================================================================

/// Everything a renderer needs for one avatar: the seed-parameterized remote
/// URL and the local initials fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarIdentity {
    pub seed: u32,
    pub initials: String,
    pub url: String,
    pub size: AvatarSize,
}

impl AvatarIdentity {
    /// Derive the full identity bundle from a display name.
    pub fn from_name(name: &str, size: AvatarSize) -> Self {
        Self {
            seed: identity_seed(name),
            initials: initials(name),
            url: avatar_url(name, size),
            size,
        }
    }
}

// =============================================================================
// AvatarState - per-render fallback machine
// =============================================================================

/// Per-render-instance image state.
///
/// Starts at `ImageAttempted`; a load-error event moves it to
/// `FallbackShown`, one way, once. There is no retry path back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AvatarState {
    #[default]
    ImageAttempted,
    FallbackShown,
}

impl AvatarState {
    /// Transition taken when the image element reports a load error.
    pub fn on_load_error(self) -> Self {
        AvatarState::FallbackShown
    }

    pub fn is_fallback(self) -> bool {
        self == AvatarState::FallbackShown
    }
}

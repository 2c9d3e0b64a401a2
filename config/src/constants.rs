//! # Configuration Constants
//!
//! Centralized constants for the realization pipeline.
//!
//! ## Categories
//!
//! - **Tessellation**: Fragment counts for curved leaf shapes
//! - **Limits**: Maximum buffer sizes accepted by the mesh sink
//! - **Vertex Layout**: Interleaved GPU vertex format
//! - **Content**: Resource-provider schemes and timeouts

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default minimum fragment angle in degrees for curved shapes.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FA;
///
/// let max_from_angle = 360.0 / DEFAULT_FA; // = 30 fragments
/// assert_eq!(max_from_angle, 30.0);
/// ```
pub const DEFAULT_FA: f64 = 12.0;

/// Default minimum fragment edge length for curved shapes.
pub const DEFAULT_FS: f64 = 2.0;

/// Minimum number of fragments for any circular shape.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_FRAGMENTS;
///
/// let computed_fragments = 2; // Too few
/// let actual_fragments = computed_fragments.max(MIN_FRAGMENTS);
/// assert_eq!(actual_fragments, MIN_FRAGMENTS);
/// ```
pub const MIN_FRAGMENTS: u32 = 5;

/// Maximum number of fragments for any circular shape.
///
/// Safety limit to prevent excessive tessellation.
pub const MAX_FRAGMENTS: u32 = 1000;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices accepted by a single mesh buffer.
///
/// Indices are emitted as `u32`, so this must stay below `u32::MAX`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles accepted by a single mesh buffer.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// VERTEX LAYOUT
// =============================================================================

/// Number of `f32` components per position.
pub const POSITION_COMPONENTS: usize = 3;

/// Number of `f32` components per normal.
pub const NORMAL_COMPONENTS: usize = 3;

/// Number of `f32` components per texture coordinate.
pub const TEX_COORD_COMPONENTS: usize = 2;

/// Number of `f32` components per color (RGBA).
pub const COLOR_COMPONENTS: usize = 4;

/// Number of `f32` values per interleaved vertex.
///
/// Layout: position, normal, tex coords, color.
pub const VERTEX_STRIDE: usize =
    POSITION_COMPONENTS + NORMAL_COMPONENTS + TEX_COORD_COMPONENTS + COLOR_COMPONENTS;

/// Default color when none is specified.
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// CONTENT CONSTANTS
// =============================================================================

/// Name prefix selecting a bundled resource (matched ASCII case-insensitively).
///
/// # Example
///
/// ```rust
/// use config::constants::EMBEDDED_SCHEME;
///
/// let name = "embedded:Foo.png";
/// assert_eq!(&name[EMBEDDED_SCHEME.len()..], "Foo.png");
/// ```
pub const EMBEDDED_SCHEME: &str = "embedded:";

/// Name prefixes selecting a remote resource (matched ASCII case-insensitively).
pub const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Timeout applied to remote resource requests, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of fragments for a circular shape.
///
/// - If `fn_value > 0`: use it directly
/// - Otherwise: `ceil(min(360 / fa, 2*PI*r / fs))`
///
/// The result is clamped to `MIN_FRAGMENTS..=MAX_FRAGMENTS`.
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_fragments, DEFAULT_FA, DEFAULT_FS};
///
/// let fragments = compute_fragments(10.0, 32.0, DEFAULT_FA, DEFAULT_FS);
/// assert_eq!(fragments, 32);
///
/// let fragments = compute_fragments(10.0, 0.0, DEFAULT_FA, DEFAULT_FS);
/// assert!(fragments >= 5);
/// ```
pub fn compute_fragments(radius: f64, fn_value: f64, fa_value: f64, fs_value: f64) -> u32 {
    let fragments = if fn_value > 0.0 {
        fn_value as u32
    } else {
        let from_angle = 360.0 / fa_value;
        let from_size = (2.0 * std::f64::consts::PI * radius) / fs_value;
        from_angle.min(from_size).ceil() as u32
    };

    fragments.clamp(MIN_FRAGMENTS, MAX_FRAGMENTS)
}

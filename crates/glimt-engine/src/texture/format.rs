/// Maps a decoded channel count to a GL `(format, internal_format)` pair.
///
/// Only 1-4 channels have an upload path; anything else makes the load fail.
pub(crate) fn channel_formats(channels: u8) -> Option<(u32, u32)> {
    match channels {
        1 => Some((glow::RED, glow::R8)),
        2 => Some((glow::RG, glow::RG8)),
        3 => Some((glow::RGB, glow::RGB8)),
        4 => Some((glow::RGBA, glow::RGBA8)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_channels_map_to_rgb() {
        assert_eq!(channel_formats(3), Some((glow::RGB, glow::RGB8)));
    }

    #[test]
    fn four_channels_map_to_rgba() {
        assert_eq!(channel_formats(4), Some((glow::RGBA, glow::RGBA8)));
    }

    #[test]
    fn one_and_two_channels_map_to_red_and_rg() {
        assert_eq!(channel_formats(1), Some((glow::RED, glow::R8)));
        assert_eq!(channel_formats(2), Some((glow::RG, glow::RG8)));
    }

    #[test]
    fn unsupported_channel_counts_are_rejected() {
        assert_eq!(channel_formats(0), None);
        assert_eq!(channel_formats(5), None);
        assert_eq!(channel_formats(255), None);
    }
}

//! Procedural PCM synthesis for the built-in sound effects.
//!
//! The adapter ships no asset files. Every sound is rendered at startup into
//! an in-memory mono PCM16 WAV that macroquad can decode directly.

const SAMPLE_RATE: u32 = 44_100;
const WAV_HEADER_LEN: usize = 44;

/// WAV bytes for the short two-note blip played when the snake eats.
#[must_use]
pub fn bite_wav() -> Vec<u8> {
    encode_wav(&sequence(&[(880.0, 0.06), (1318.5, 0.07)], 0.6))
}

/// WAV bytes for the descending jingle played when a run ends.
#[must_use]
pub fn game_over_wav() -> Vec<u8> {
    encode_wav(&sequence(
        &[(440.0, 0.18), (329.63, 0.18), (261.63, 0.18), (220.0, 0.26)],
        0.55,
    ))
}

/// WAV bytes for the background melody, intended to be played looped.
#[must_use]
pub fn music_wav() -> Vec<u8> {
    encode_wav(&sequence(
        &[
            (440.0, 0.25),
            (523.25, 0.25),
            (659.25, 0.25),
            (880.0, 0.25),
            (783.99, 0.25),
            (659.25, 0.25),
            (523.25, 0.25),
            (392.0, 0.25),
        ],
        0.3,
    ))
}

/// Renders a sine note with a linear fade-out to avoid clicks at note ends.
fn tone(frequency_hz: f32, duration_seconds: f32, amplitude: f32) -> Vec<i16> {
    let amplitude = amplitude.clamp(0.0, 1.0);
    let sample_count = (duration_seconds * SAMPLE_RATE as f32) as usize;
    let mut samples = Vec::with_capacity(sample_count);

    for index in 0..sample_count {
        let t = index as f32 / SAMPLE_RATE as f32;
        let envelope = 1.0 - index as f32 / sample_count as f32;
        let level = amplitude * envelope * (std::f32::consts::TAU * frequency_hz * t).sin();
        samples.push((level * i16::MAX as f32) as i16);
    }

    samples
}

fn sequence(notes: &[(f32, f32)], amplitude: f32) -> Vec<i16> {
    let mut samples = Vec::new();
    for &(frequency_hz, duration_seconds) in notes {
        samples.extend(tone(frequency_hz, duration_seconds, amplitude));
    }
    samples
}

/// Wraps mono PCM16 samples in a RIFF/WAVE container.
fn encode_wav(samples: &[i16]) -> Vec<u8> {
    let block_align: u16 = 2;
    let byte_rate: u32 = SAMPLE_RATE * u32::from(block_align);
    let data_size = (samples.len() * 2) as u32;
    let chunk_size = 36 + data_size;

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + samples.len() * 2);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&chunk_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn tone_renders_one_sample_per_clock_tick() {
        let samples = tone(440.0, 0.5, 0.5);

        assert_eq!(samples.len(), 22_050);
    }

    #[test]
    fn tone_reaches_an_audible_peak() {
        let samples = tone(440.0, 0.5, 1.0);

        let peak = samples.iter().map(|sample| sample.abs()).max();
        assert!(peak.map(|peak| peak > 30_000).unwrap_or(false));
    }

    #[test]
    fn tone_fades_out_to_silence() {
        let samples = tone(440.0, 0.5, 0.5);

        let last = samples.last().copied().unwrap_or(i16::MAX);
        assert!(last.abs() < 100);
    }

    #[test]
    fn tone_clamps_the_amplitude_to_unit_range() {
        let boosted = tone(440.0, 0.1, 4.0);
        let unit = tone(440.0, 0.1, 1.0);

        assert_eq!(boosted, unit);
    }

    #[test]
    fn encode_wav_writes_a_consistent_riff_header() {
        let wav = encode_wav(&[0, 1_000, -1_000, i16::MAX, i16::MIN]);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(le_u32(&wav, 4) as usize, wav.len() - 8);
        assert_eq!(le_u32(&wav, 24), SAMPLE_RATE);
        assert_eq!(le_u32(&wav, 40) as usize, wav.len() - WAV_HEADER_LEN);
        assert_eq!(wav.len(), WAV_HEADER_LEN + 5 * 2);
    }

    #[test]
    fn encode_wav_accepts_an_empty_sample_buffer() {
        let wav = encode_wav(&[]);

        assert_eq!(wav.len(), WAV_HEADER_LEN);
        assert_eq!(le_u32(&wav, 40), 0);
    }

    #[test]
    fn built_in_sounds_stay_within_expected_lengths() {
        let bite = bite_wav();
        let game_over = game_over_wav();
        let music = music_wav();

        assert!(bite.len() > WAV_HEADER_LEN);
        assert!(game_over.len() > bite.len());
        assert!(music.len() > game_over.len());
    }
}

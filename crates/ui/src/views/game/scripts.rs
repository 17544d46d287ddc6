//
// ─── INJECTED SCRIPTS ──────────────────────────────────────────────────────────
//
// Confetti and audio are pure decoration: they run in the webview, read
// nothing back, and never touch game state.

/// Oscillator presets for the audio feedback cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SoundCue {
    Correct,
    Incorrect,
    Hint,
    Success,
}

pub(super) fn sound_script(cue: SoundCue) -> String {
    let body = match cue {
        SoundCue::Correct => "play(523.25, \"sine\", 0.2, 0);",
        SoundCue::Incorrect => "play(200, \"square\", 0.15, 0);",
        SoundCue::Hint => "play(800, \"sine\", 0.1, 0);",
        SoundCue::Success => {
            "[523.25, 587.33, 659.25, 783.99].forEach((freq, i) => play(freq, \"sine\", 0.15, i * 0.15));"
        }
    };
    format!(
        r#"(function() {{
                    const audio = window.__hcfAudio || (window.__hcfAudio = new (window.AudioContext || window.webkitAudioContext)());
                    const play = (freq, shape, length, offset) => {{
                        const osc = audio.createOscillator();
                        const gain = audio.createGain();
                        osc.connect(gain);
                        gain.connect(audio.destination);
                        osc.frequency.value = freq;
                        osc.type = shape;
                        gain.gain.value = 0.1;
                        gain.gain.exponentialRampToValueAtTime(0.01, audio.currentTime + offset + length);
                        osc.start(audio.currentTime + offset);
                        osc.stop(audio.currentTime + offset + length);
                    }};
                    {body}
                }})();"#
    )
}

pub(super) fn confetti_script() -> String {
    r#"(function() {
                const container = document.getElementById("confetti-container");
                if (!container) return;
                const glyphs = ["🎉", "🎊", "⭐", "✨", "🌟"];
                for (let i = 0; i < 30; i++) {
                    setTimeout(() => {
                        const piece = document.createElement("div");
                        piece.className = "confetti";
                        piece.textContent = glyphs[Math.floor(Math.random() * glyphs.length)];
                        piece.style.left = Math.random() * 100 + "%";
                        piece.style.animationDuration = (Math.random() * 2 + 2) + "s";
                        container.appendChild(piece);
                        setTimeout(() => piece.remove(), 3000);
                    }, i * 50);
                }
            })();"#
        .to_string()
}

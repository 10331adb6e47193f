/// Sampling temperature for intent parsing; low for repeatable output.
pub const TEMPERATURE: f32 = 0.2;

pub const SYSTEM_PROMPT: &str = r#"You are an assistant for a voice-controlled music player.
Interpret the user's command and respond ONLY as compact JSON following this TypeScript type:
{
  action: 'play' | 'pause' | 'skip' | 'queue' | 'create_playlist',
  payload?: { mood?: string, genre?: string, trackId?: string, playlistName?: string }
}
Examples:
- "Play something relaxing" -> {"action":"play","payload":{"mood":"relaxing"}}
- "Skip this" -> {"action":"skip"}
- "Make a chill playlist" -> {"action":"create_playlist","payload":{"playlistName":"chill"}}
"#;

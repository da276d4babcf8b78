//! Device/vendor modes and their per-mode quirks
//!
//! Each mode pins one input file, the two top-level set sections, and the
//! numbering and naming quirks of that vendor's file. Everything
//! mode-specific lives in one static [`ModeConfig`] record selected once at
//! startup, so the rest of the converter branches on data instead of
//! scattering mode conditionals.

use clap::ValueEnum;

/// Device profile selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// General MIDI Level 1+2
    Gm,
    /// Yamaha MU1000/MU2000 (XG)
    Xg,
    /// Microsoft GS Wavetable Synth
    Gs,
    /// Roland SC-8850
    Sc,
    /// Yamaha XG as defined by Cakewalk Sonar
    SonarXg,
    /// Roland GS as defined by Cakewalk Sonar
    SonarGs,
}

/// Bank display-name rewrite: a canonical vendor prefix and its replacement
#[derive(Debug, Clone, Copy)]
pub struct NameRewrite {
    pub strip: &'static str,
    pub replace_with: &'static str,
}

/// Static per-mode configuration
#[derive(Debug, Clone, Copy)]
pub struct ModeConfig {
    /// Default input file
    pub input_file: &'static str,
    /// Top-level section listing the melodic bank set
    pub melodic_section: &'static str,
    /// Top-level section listing the drum set
    pub drum_section: &'static str,
    /// Optional bank display-name prefix rewrite
    pub name_rewrite: Option<NameRewrite>,
    /// The first drum selector is a combined bank value that must divide
    /// evenly by 128
    pub combined_drum_banks: bool,
    /// Drum bank MSBs print as `127 - msb`
    pub reversed_drum_msb: bool,
}

static GM: ModeConfig = ModeConfig {
    input_file: "instrument/GM1_GM2.ins",
    melodic_section: "General MIDI Level 2",
    drum_section: "General MIDI Level 2 Drumsets",
    name_rewrite: Some(NameRewrite {
        strip: "General MIDI Level 2 ",
        replace_with: "GM2 ",
    }),
    combined_drum_banks: false,
    reversed_drum_msb: false,
};

static XG: ModeConfig = ModeConfig {
    input_file: "instrument/YAMAHA_MU1000_MU2000.ins",
    melodic_section: "YAMAHA MU1000/MU2000",
    drum_section: "YAMAHA MU1000/MU2000 Drumsets",
    name_rewrite: Some(NameRewrite {
        strip: "YAMAHA MU1000/MU2000 ",
        replace_with: "XG ",
    }),
    combined_drum_banks: true,
    reversed_drum_msb: true,
};

static GS: ModeConfig = ModeConfig {
    input_file: "instrument/Microsoft_GS_Wavetable_Synth.ins",
    melodic_section: "Microsoft GS Wavetable Synth",
    drum_section: "Microsoft GS Wavetable Synth Drumsets",
    name_rewrite: Some(NameRewrite {
        strip: "Microsoft GS ",
        replace_with: "GS ",
    }),
    combined_drum_banks: false,
    reversed_drum_msb: false,
};

static SC: ModeConfig = ModeConfig {
    input_file: "instrument/Roland_SC-8850.ins",
    melodic_section: "Roland SC-8850",
    drum_section: "Roland SC-8850 Drumsets",
    name_rewrite: Some(NameRewrite {
        strip: "Roland SC-",
        replace_with: "SC-",
    }),
    combined_drum_banks: false,
    reversed_drum_msb: false,
};

static SONAR_XG: ModeConfig = ModeConfig {
    input_file: "instrument/Sonar.ins",
    melodic_section: "Yamaha XG",
    drum_section: "Yamaha XG Drum Kits",
    name_rewrite: None,
    combined_drum_banks: true,
    reversed_drum_msb: true,
};

static SONAR_GS: ModeConfig = ModeConfig {
    input_file: "instrument/Sonar.ins",
    melodic_section: "Roland GS",
    drum_section: "Roland GS Drumsets",
    name_rewrite: None,
    combined_drum_banks: false,
    reversed_drum_msb: false,
};

impl Mode {
    /// The static configuration record for this mode
    pub fn config(self) -> &'static ModeConfig {
        match self {
            Mode::Gm => &GM,
            Mode::Xg => &XG,
            Mode::Gs => &GS,
            Mode::Sc => &SC,
            Mode::SonarXg => &SONAR_XG,
            Mode::SonarGs => &SONAR_GS,
        }
    }

    /// Command-line name of the mode
    pub fn name(self) -> &'static str {
        match self {
            Mode::Gm => "gm",
            Mode::Xg => "xg",
            Mode::Gs => "gs",
            Mode::Sc => "sc",
            Mode::SonarXg => "sonar-xg",
            Mode::SonarGs => "sonar-gs",
        }
    }
}

/// A practice language: locale code for speech capture, display name for the
/// evaluation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        code: "es-ES",
        name: "Spanish",
    },
    Language {
        code: "fr-FR",
        name: "French",
    },
    Language {
        code: "en-US",
        name: "English",
    },
    Language {
        code: "de-DE",
        name: "German",
    },
    Language {
        code: "it-IT",
        name: "Italian",
    },
    Language {
        code: "pt-BR",
        name: "Portuguese",
    },
    Language {
        code: "ja-JP",
        name: "Japanese",
    },
    Language {
        code: "ko-KR",
        name: "Korean",
    },
    Language {
        code: "zh-CN",
        name: "Chinese",
    },
    Language {
        code: "hi-IN",
        name: "Hindi",
    },
    Language {
        code: "ru-RU",
        name: "Russian",
    },
    Language {
        code: "ar-SA",
        name: "Arabic",
    },
];

impl Language {
    pub fn find(code: &str) -> Option<Self> {
        LANGUAGES.iter().copied().find(|lang| lang.code == code)
    }
}

impl Default for Language {
    fn default() -> Self {
        LANGUAGES[2]
    }
}

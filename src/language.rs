#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Language {
  En,
  Ko,
}

impl Language {
  pub const ALL: [Self; 2] = [Self::En, Self::Ko];

  pub fn code(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ko => "ko",
    }
  }

  /// Looks up a short locale code in the primary language map. Codes
  /// absent from the map are unsupported.
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "en" => Some(Self::En),
      "ko" => Some(Self::Ko),
      _ => None,
    }
  }

  /// The locale code giscus expects, see <https://giscus.app/>.
  pub fn giscus_code(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ko => "ko",
    }
  }

  /// Region-qualified locale tags for this language.
  pub fn tags(self) -> &'static [&'static str] {
    match self {
      Self::En => &["en-US"],
      Self::Ko => &["ko-KR"],
    }
  }

  /// The locale code waline expects, see <https://waline.js.org/>.
  pub fn waline_code(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ko => "ko",
    }
  }
}

use super::*;

/// The fixed set of theme strings every locale provides.
#[derive(Clone, Copy, Debug)]
pub struct UiStrings {
  pub about: &'static str,
  pub description: &'static str,
  pub posts: &'static str,
  pub subtitle: &'static str,
  pub table_of_contents: &'static str,
  pub tags: &'static str,
  pub title: &'static str,
}

static EN: UiStrings = UiStrings {
  about: "About",
  description: "Retypeset is a static blog theme based on the Astro \
    framework. Inspired by Typography, Retypeset establishes a new visual \
    standard and reimagines the layout of all pages, creating a reading \
    experience reminiscent of paper books, reviving the beauty of \
    typography. Details in every sight, elegance in every space.",
  posts: "Posts",
  subtitle: "Revive the beauty of typography",
  table_of_contents: "Table of Contents",
  tags: "Tags",
  title: "Retypeset",
};

static KO: UiStrings = UiStrings {
  about: "소개",
  description: "Retypeset은 Astro 프레임워크를 기반으로 한 정적 블로그 \
    테마로, 한국어로는 \"재조판\"이라고 합니다. 이 테마는 활판 인쇄에서 \
    디자인 영감을 얻어, 새로운 시각적 기준을 확립하고 모든 페이지를 \
    재구성하여 종이책과 같은 독서 경험을 제공하며 판형의 아름다움을 \
    되살립니다. 모든 것이 세부적인 디테일이며, 작은 공간에서도 우아함이 \
    느껴집니다.",
  posts: "포스트",
  subtitle: "typography의 아름다움을 재현하다",
  table_of_contents: "목차",
  tags: "태그",
  title: "Retypeset",
};

impl Language {
  pub fn ui_strings(self) -> &'static UiStrings {
    match self {
      Self::En => &EN,
      Self::Ko => &KO,
    }
  }
}

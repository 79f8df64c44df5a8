//! Region codes and their display labels
//!
//! The set of regions is closed: seventeen sub-national regions plus the
//! national aggregate. Every code has exactly one label and every label
//! exactly one code, so lookups in either direction are total over the enum.

use serde::Serialize;
use std::fmt;

/// A region appearing in the population table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RegionCode {
    Seoul,
    Busan,
    Daegu,
    Incheon,
    Gwangju,
    Daejeon,
    Ulsan,
    Sejong,
    Gyeonggi,
    Gangwon,
    Chungbuk,
    Chungnam,
    Jeonbuk,
    Jeonnam,
    Gyeongbuk,
    Gyeongnam,
    Jeju,
    /// Whole-country total
    National,
}

impl RegionCode {
    /// Every region, in declaration order
    pub const ALL: [Self; 18] = [
        Self::Seoul,
        Self::Busan,
        Self::Daegu,
        Self::Incheon,
        Self::Gwangju,
        Self::Daejeon,
        Self::Ulsan,
        Self::Sejong,
        Self::Gyeonggi,
        Self::Gangwon,
        Self::Chungbuk,
        Self::Chungnam,
        Self::Jeonbuk,
        Self::Jeonnam,
        Self::Gyeongbuk,
        Self::Gyeongnam,
        Self::Jeju,
        Self::National,
    ];

    /// The code used in source tables
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Seoul => "서울",
            Self::Busan => "부산",
            Self::Daegu => "대구",
            Self::Incheon => "인천",
            Self::Gwangju => "광주",
            Self::Daejeon => "대전",
            Self::Ulsan => "울산",
            Self::Sejong => "세종",
            Self::Gyeonggi => "경기",
            Self::Gangwon => "강원",
            Self::Chungbuk => "충북",
            Self::Chungnam => "충남",
            Self::Jeonbuk => "전북",
            Self::Jeonnam => "전남",
            Self::Gyeongbuk => "경북",
            Self::Gyeongnam => "경남",
            Self::Jeju => "제주",
            Self::National => "전국",
        }
    }

    /// The display label used by downstream views
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seoul => "Seoul",
            Self::Busan => "Busan",
            Self::Daegu => "Daegu",
            Self::Incheon => "Incheon",
            Self::Gwangju => "Gwangju",
            Self::Daejeon => "Daejeon",
            Self::Ulsan => "Ulsan",
            Self::Sejong => "Sejong",
            Self::Gyeonggi => "Gyeonggi",
            Self::Gangwon => "Gangwon",
            Self::Chungbuk => "Chungbuk",
            Self::Chungnam => "Chungnam",
            Self::Jeonbuk => "Jeonbuk",
            Self::Jeonnam => "Jeonnam",
            Self::Gyeongbuk => "Gyeongbuk",
            Self::Gyeongnam => "Gyeongnam",
            Self::Jeju => "Jeju",
            Self::National => "National",
        }
    }

    /// Whether this is the national aggregate
    #[must_use]
    pub const fn is_national(self) -> bool {
        matches!(self, Self::National)
    }

    /// Whether historical rows of this region carry a textual "no data"
    /// placeholder instead of zero
    #[must_use]
    pub const fn uses_placeholder(self) -> bool {
        matches!(self, Self::Sejong)
    }

    /// Resolve a raw code or display label
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything outside
    /// the closed set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.code() == raw || region.label() == raw)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Message code tables for makemkvcon robot output
//!
//! The severity table covers the message codes MakeMKV 1.16 ships in its
//! English string table. Codes outside it are classified from the `MSG`
//! flags column instead.

use crate::apdefs::strings::{
    APP_TTREE_AUDIO, APP_TTREE_SUBPICTURE, APP_TTREE_VIDEO, BRAY_TYPE_DISK, DVD_TYPE_DISK,
    HDDVD_TYPE_DISK, MKV_TYPE_FILE,
};
use crate::apdefs::{MessageBox, UiMsgFlags};
use crate::types::{DiscType, StreamType};
use log::Level;

/// Severity of a makemkvcon message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    /// The operation cannot continue; the process gets killed
    Critical,
}

impl Severity {
    /// `log` has no critical level, those go out as errors
    pub fn log_level(self) -> Level {
        match self {
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warning => Level::Warn,
            Severity::Error | Severity::Critical => Level::Error,
        }
    }
}

/// Severity of a known message code
pub fn message_severity(code: u32) -> Option<Severity> {
    match code {
        1000..=1006 | 1011..=1012 | 3100..=3111 | 3200..=3203 | 3210 | 3400..=3407
        | 5025..=5031 | 5033 | 5044..=5050 | 5057 | 5060..=5067 | 5085..=5093 | 5100 => {
            Some(Severity::Debug)
        }
        2010 | 2014 | 3006..=3007 | 3011..=3014 | 3016..=3018 | 3025 | 3027..=3030 | 3034
        | 3037..=3038 | 3040 | 3220 | 3300 | 3302 | 3304..=3305 | 3307..=3309 | 3317 | 3322
        | 3324 | 3326 | 3328 | 3332 | 3338 | 3341 | 3344 | 4001..=4002 | 4052 | 5002 | 5005
        | 5011..=5012 | 5014..=5015 | 5017..=5019 | 5024 | 5036 | 5070 | 5072 | 5074 | 5081
        | 5094 => Some(Severity::Info),
        1007 | 2008..=2009 | 2011..=2012 | 2015 | 2017 | 2020..=2021 | 2024 | 2201..=2203
        | 2208 | 2211 | 3001..=3005 | 3008..=3009 | 3015 | 3019..=3024 | 3026 | 3031..=3033
        | 3035..=3036 | 3039 | 3041..=3043 | 3221 | 3301 | 3303 | 3306 | 3310..=3316
        | 3318..=3321 | 3327 | 3329..=3330 | 3333..=3337 | 3339..=3340 | 3342..=3343
        | 3345..=3347 | 4003..=4004 | 4007..=4009 | 4020..=4028 | 4040 | 4046..=4051 | 4053
        | 4055 | 4060..=4062 | 5000..=5001 | 5004 | 5013 | 5037..=5042 | 5051..=5056 | 5058
        | 5068 | 5071 | 5073 | 5075..=5079 | 5082..=5084 | 5101 => Some(Severity::Warning),
        1008..=1010 | 2001 | 2003..=2004 | 2006..=2007 | 2013 | 2016 | 2018..=2019
        | 2022..=2023 | 2200 | 2204..=2207 | 2209..=2210 | 2300..=2304 | 2400..=2402 | 2404
        | 3000 | 3010 | 3323 | 3325 | 3331 | 4041..=4045 | 4054 | 5003 | 5006..=5009 | 5016
        | 5020..=5022 | 5043 | 5069 => Some(Severity::Error),
        5010 | 5080 => Some(Severity::Critical),
        _ => None,
    }
}

/// Severity for a `MSG` line: the code table first, then the box kind
pub fn classify(code: u32, flags: UiMsgFlags) -> Severity {
    if let Some(severity) = message_severity(code) {
        return severity;
    }
    match flags.message_box() {
        Some(MessageBox::Error | MessageBox::YesNoError) => Severity::Error,
        Some(MessageBox::Warning) => Severity::Warning,
        _ => Severity::Debug,
    }
}

/// Stream type behind a constant-string value code
pub fn stream_type(code: u32) -> Option<StreamType> {
    match code {
        APP_TTREE_VIDEO => Some(StreamType::Video),
        APP_TTREE_AUDIO => Some(StreamType::Audio),
        APP_TTREE_SUBPICTURE => Some(StreamType::Subtitles),
        _ => None,
    }
}

/// Disc type behind a constant-string value code
pub fn disc_type(code: u32) -> Option<DiscType> {
    match code {
        DVD_TYPE_DISK => Some(DiscType::Dvd),
        BRAY_TYPE_DISK => Some(DiscType::Bd),
        HDDVD_TYPE_DISK => Some(DiscType::Hddvd),
        MKV_TYPE_FILE => Some(DiscType::Mkv),
        _ => None,
    }
}

//! Typed robot-mode records

use super::tokenizer;
use crate::apdefs::{DiskFsFlags, DriveState, ItemAttributeId, UiMsgFlags};
use std::fmt;

/// Why a line could not be turned into a [`RobotLine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotParseError {
    /// The line has no `TAG:` prefix
    NotRobotLine,
    UnknownTag(String),
    MissingField { tag: &'static str, index: usize },
    InvalidNumber { tag: &'static str, index: usize, value: String },
}

impl fmt::Display for RobotParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotParseError::NotRobotLine => write!(f, "not a robot line"),
            RobotParseError::UnknownTag(tag) => write!(f, "unknown tag {tag}"),
            RobotParseError::MissingField { tag, index } => {
                write!(f, "{tag} line is missing field {index}")
            }
            RobotParseError::InvalidNumber { tag, index, value } => {
                write!(f, "{tag} field {index} is not a number: {value:?}")
            }
        }
    }
}

impl std::error::Error for RobotParseError {}

/// `MSG:code,flags,count,message,format,param0,param1,...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Language neutral message identifier
    pub code: u32,
    pub flags: UiMsgFlags,
    /// Rendered message text
    pub message: String,
    /// Localized format string with `%1`.. placeholders
    pub format: String,
    pub params: Vec<String>,
}

/// `PRGT:code,id,name` and `PRGC:code,id,name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTitle {
    pub code: u32,
    pub id: u32,
    pub name: String,
}

/// `DRV:index,state,enabled,flags,drive name,disc name,device path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveLine {
    pub index: u32,
    /// Raw state column, see [`DriveLine::state`]
    pub state_value: u32,
    pub enabled: u32,
    pub flags: DiskFsFlags,
    pub drive_name: String,
    pub disc_name: String,
    pub device_path: String,
}

impl DriveLine {
    pub fn state(&self) -> Option<DriveState> {
        DriveState::try_from(self.state_value).ok()
    }

    /// A drive slot that is not backed by hardware
    pub fn is_empty_slot(&self) -> bool {
        self.drive_name.is_empty() && self.disc_name.is_empty() && self.device_path.is_empty()
    }
}

/// `id,code,value` tail shared by CINFO, TINFO and SINFO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeLine {
    pub id: u32,
    /// Constant-string code, 0 when `value` is free text
    pub code: u32,
    pub value: String,
}

impl AttributeLine {
    pub fn attribute(&self) -> Option<ItemAttributeId> {
        ItemAttributeId::try_from(self.id).ok()
    }
}

/// One line of makemkvcon robot output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotLine {
    Message(Message),
    /// Title of the overall operation
    ProgressTotal(ProgressTitle),
    /// Title of the current sub-operation
    ProgressCurrent(ProgressTitle),
    /// `PRGV:current,total,max`
    ProgressValue { current: u32, total: u32, max: u32 },
    Drive(DriveLine),
    /// `TCOUNT:count`
    TitleCount(u32),
    DiscInfo(AttributeLine),
    /// `TINFO:title,id,code,value`
    TitleInfo { title: usize, attribute: AttributeLine },
    /// `SINFO:title,stream,id,code,value`
    StreamInfo { title: usize, stream: usize, attribute: AttributeLine },
}

impl RobotLine {
    pub fn parse(line: &str) -> Result<RobotLine, RobotParseError> {
        let (tag, fields) = tokenizer::split_line(line).ok_or(RobotParseError::NotRobotLine)?;

        match tag {
            "MSG" => {
                let f = Fields::new("MSG", &fields);
                Ok(RobotLine::Message(Message {
                    code: f.number(0)?,
                    flags: UiMsgFlags::from_bits_retain(f.number(1)?),
                    message: f.text(3)?,
                    format: f.text(4).unwrap_or_default(),
                    params: fields.iter().skip(5).cloned().collect(),
                }))
            }
            "PRGT" => Ok(RobotLine::ProgressTotal(progress_title(Fields::new("PRGT", &fields))?)),
            "PRGC" => Ok(RobotLine::ProgressCurrent(progress_title(Fields::new(
                "PRGC", &fields,
            ))?)),
            "PRGV" => {
                let f = Fields::new("PRGV", &fields);
                Ok(RobotLine::ProgressValue {
                    current: f.number(0)?,
                    total: f.number(1)?,
                    max: f.number(2)?,
                })
            }
            "DRV" => {
                let f = Fields::new("DRV", &fields);
                Ok(RobotLine::Drive(DriveLine {
                    index: f.number(0)?,
                    state_value: f.number(1)?,
                    enabled: f.number(2)?,
                    flags: DiskFsFlags::from_bits_retain(f.number(3)?),
                    drive_name: f.text(4)?,
                    disc_name: f.text(5)?,
                    device_path: f.text(6)?,
                }))
            }
            "TCOUNT" => Ok(RobotLine::TitleCount(Fields::new("TCOUNT", &fields).number(0)?)),
            "CINFO" => Ok(RobotLine::DiscInfo(Fields::new("CINFO", &fields).attribute(0)?)),
            "TINFO" => {
                let f = Fields::new("TINFO", &fields);
                Ok(RobotLine::TitleInfo {
                    title: f.index(0)?,
                    attribute: f.attribute(1)?,
                })
            }
            "SINFO" => {
                let f = Fields::new("SINFO", &fields);
                Ok(RobotLine::StreamInfo {
                    title: f.index(0)?,
                    stream: f.index(1)?,
                    attribute: f.attribute(2)?,
                })
            }
            other => Err(RobotParseError::UnknownTag(other.to_string())),
        }
    }
}

fn progress_title(f: Fields<'_>) -> Result<ProgressTitle, RobotParseError> {
    Ok(ProgressTitle {
        code: f.number(0)?,
        id: f.number(1)?,
        name: f.text(2)?,
    })
}

/// Positional access to the fields of one line
struct Fields<'a> {
    tag: &'static str,
    fields: &'a [String],
}

impl<'a> Fields<'a> {
    fn new(tag: &'static str, fields: &'a [String]) -> Self {
        Fields { tag, fields }
    }

    fn raw(&self, index: usize) -> Result<&'a str, RobotParseError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(RobotParseError::MissingField { tag: self.tag, index })
    }

    fn text(&self, index: usize) -> Result<String, RobotParseError> {
        self.raw(index).map(str::to_string)
    }

    fn number(&self, index: usize) -> Result<u32, RobotParseError> {
        let value = self.raw(index)?;
        value.trim().parse().map_err(|_| RobotParseError::InvalidNumber {
            tag: self.tag,
            index,
            value: value.to_string(),
        })
    }

    fn index(&self, index: usize) -> Result<usize, RobotParseError> {
        self.number(index).map(|n| n as usize)
    }

    fn attribute(&self, start: usize) -> Result<AttributeLine, RobotParseError> {
        Ok(AttributeLine {
            id: self.number(start)?,
            code: self.number(start + 1)?,
            value: self.text(start + 2)?,
        })
    }
}

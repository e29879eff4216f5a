//! End-to-end parsing of recorded makemkvcon output

use makemkv::apdefs::{DiskFsFlags, DriveState, StreamFlags};
use makemkv::{DiscType, MakeMkvError, MakeMkvOutput, StreamType, parse_log};

const INFO_LOG: &str = include_str!("data/info_bd.log");

fn parse_info_log() -> MakeMkvOutput {
    parse_log(INFO_LOG.lines()).unwrap()
}

#[test]
fn test_recorded_drives() {
    let output = parse_info_log();
    assert_eq!(output.drives.len(), 1);

    let drive = &output.drives[0];
    assert_eq!(drive.index, 0);
    assert_eq!(drive.state, Some(DriveState::Inserted));
    assert_eq!(drive.disc_name.as_deref(), Some("FOO_BAR"));
    assert_eq!(drive.device_path.as_deref(), Some("/dev/sr0"));
    assert!(drive.fs_flags().contains(DiskFsFlags::BLURAY_FILES));
}

#[test]
fn test_recorded_disc() {
    let output = parse_info_log();
    assert_eq!(output.title_count, Some(2));

    let disc = output.disc.as_ref().unwrap();
    assert_eq!(disc.disc_type, Some(DiscType::Bd));
    assert_eq!(disc.name.as_deref(), Some("Foo Bar"));
    assert_eq!(disc.metadata_langcode.as_deref(), Some("en"));
    assert_eq!(disc.volume_name.as_deref(), Some("FOO_BAR"));
    assert_eq!(disc.comment.as_deref(), Some("BD-123456_FooBar_ABC1"));
}

#[test]
fn test_recorded_titles() {
    let output = parse_info_log();
    assert_eq!(output.titles.len(), 2);

    let main = &output.titles[0];
    assert_eq!(main.chapter_count, Some(42));
    assert_eq!(main.length.as_deref(), Some("1:58:12"));
    assert_eq!(main.size, Some(31_503_215_616));
    assert_eq!(main.original_title_id, Some(1));
    assert_eq!(main.segments_map.as_deref(), Some("1,(2,4,6),11-22,23-44"));
    assert_eq!(
        main.information.as_deref(),
        Some("Foo Bar - 42 chapter(s) , 29.3 GB")
    );
    assert_eq!(main.streams.len(), 3);

    let extra = &output.titles[1];
    assert_eq!(extra.chapter_count, Some(0));
    assert_eq!(extra.segments_map.as_deref(), Some("10"));
    assert_eq!(extra.file_output.as_deref(), Some("Foo_Bar_t01.mkv"));
}

#[test]
fn test_recorded_streams() {
    let output = parse_info_log();
    let streams = &output.titles[0].streams;

    let video = &streams[0];
    assert_eq!(video.stream_type, Some(StreamType::Video));
    assert_eq!(video.codec_id.as_deref(), Some("V_MPEG4/ISO/AVC"));
    assert_eq!(video.framerate, Some(23.976));
    assert_eq!(video.flags, Some(0));

    let audio = &streams[1];
    assert_eq!(audio.stream_type, Some(StreamType::Audio));
    assert_eq!(audio.downmix.as_deref(), Some("Surround 7.1"));
    assert_eq!(audio.langcode.as_deref(), Some("en"));
    assert_eq!(audio.channel_count, Some(8));
    assert_eq!(audio.channel_layout.as_deref(), Some("7.1"));

    let subtitles = &streams[2];
    assert_eq!(subtitles.stream_type, Some(StreamType::Subtitles));
    assert_eq!(subtitles.langcode.as_deref(), Some("de"));
    assert!(subtitles.stream_flags().contains(StreamFlags::FORCED_SUBTITLES));

    let japanese = &output.titles[1].streams[1];
    assert_eq!(japanese.langcode.as_deref(), Some("ja"));
    assert_eq!(output.titles[1].streams[0].framerate, Some(25.0));
}

#[test]
fn test_recorded_json() {
    let output = parse_info_log();
    let json = output.to_sorted_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["disc"]["type"], "BD");
    assert_eq!(value["titles"][0]["streams"][2]["type"], "subtitles");
    assert!(value["titles"][1].get("comment").is_none());

    let back: MakeMkvOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back.drives, output.drives);
    assert_eq!(back.disc, output.disc);
    assert_eq!(back.titles.len(), output.titles.len());
}

#[test]
fn test_critical_message_stops_parsing() {
    let lines = [
        r#"MSG:1005,0,1,"MakeMKV v1.17.4 linux(x64-release) started","%1 started","MakeMKV v1.17.4 linux(x64-release)""#,
        r#"MSG:5080,0,0,"Evaluation period has expired","Evaluation period has expired""#,
        "TCOUNT:2",
    ];
    match parse_log(lines) {
        Err(MakeMkvError::Critical(message)) => {
            assert_eq!(message, "Evaluation period has expired")
        }
        other => panic!("expected a critical error, got {other:?}"),
    }
}

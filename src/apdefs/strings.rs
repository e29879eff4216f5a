// src/apdefs/strings.rs
// Localized string resource IDs. Each value is a key into the string table
// shipped with MakeMKV; the APP_TTREE_* and *_TYPE_DISK ones also show up as
// value codes in CINFO/TINFO/SINFO lines.

/// Key into the localized string table.
pub type ResourceId = u32;

macro_rules! resource_ids {
    ($($name:ident = $value:expr,)*) => {
        $(pub const $name: ResourceId = $value;)*

        /// Every resource ID with its symbolic name, in declaration order.
        pub const RESOURCE_IDS: &[(&str, ResourceId)] = &[$((stringify!($name), $name),)*];
    };
}

resource_ids! {
    // Engine messages
    APP_DUMP_DONE_PARTIAL = 5004,
    APP_DUMP_DONE = 5005,
    APP_INIT_FAILED = 5009,
    APP_ASK_FOLDER_CREATE = 5013,
    APP_FOLDER_INVALID = 5016,
    PROGRESS_APP_SAVE_MKV_FREE_SPACE = 5033,
    PROT_DEMO_KEY_EXPIRED = 5021,
    APP_EVAL_TIME_NEVER = 5067,
    APP_BACKUP_FAILED = 5069,
    APP_BACKUP_COMPLETED = 5070,
    APP_BACKUP_COMPLETED_HASHFAIL = 5079,
    PROFILE_NAME_DEFAULT = 5086,

    // Item info labels
    VITEM_NAME = 5202,
    VITEM_TIMESTAMP = 5223,

    // Main window
    APP_IFACE_TITLE = 6000,
    APP_CAPTION_MSG = 6001,
    APP_ABOUTBOX_TITLE = 6002,
    APP_IFACE_OPENFILE_TITLE = 6003,
    APP_SETTINGDLG_TITLE = 6135,
    APP_BACKUPDLG_TITLE = 6136,
    APP_IFACE_OPENFILE_FILTER_TEMPLATE1 = 6007,
    APP_IFACE_OPENFILE_FILTER_TEMPLATE2 = 6008,
    APP_IFACE_OPENFOLDER_TITLE = 6005,
    APP_IFACE_OPENFOLDER_INFO_TITLE = 6006,
    APP_IFACE_PROGRESS_TITLE = 6038,
    APP_IFACE_PROGRESS_ELAPSED_ONLY = 6039,
    APP_IFACE_PROGRESS_ELAPSED_ETA = 6040,

    // Actions
    APP_IFACE_ACT_OPENFILES_NAME = 6010,
    APP_IFACE_ACT_OPENFILES_SKEY = 6011,
    APP_IFACE_ACT_OPENFILES_STIP = 6012,
    APP_IFACE_ACT_OPENFILES_DVD_NAME = 6024,
    APP_IFACE_ACT_OPENFILES_DVD_STIP = 6026,
    APP_IFACE_ACT_CLOSEDISK_NAME = 6013,
    APP_IFACE_ACT_CLOSEDISK_STIP = 6014,
    APP_IFACE_ACT_SETFOLDER_NAME = 6015,
    APP_IFACE_ACT_SETFOLDER_STIP = 6016,
    APP_IFACE_ACT_SAVEALLMKV_NAME = 6017,
    APP_IFACE_ACT_SAVEALLMKV_STIP = 6018,
    APP_IFACE_ACT_CANCEL_NAME = 6036,
    APP_IFACE_ACT_CANCEL_STIP = 6037,
    APP_IFACE_ACT_STREAMING_NAME = 6131,
    APP_IFACE_ACT_STREAMING_STIP = 6132,
    APP_IFACE_ACT_BACKUP_NAME = 6133,
    APP_IFACE_ACT_BACKUP_STIP = 6134,
    APP_IFACE_ACT_QUIT_NAME = 6019,
    APP_IFACE_ACT_QUIT_SKEY = 6020,
    APP_IFACE_ACT_QUIT_STIP = 6021,
    APP_IFACE_ACT_ABOUT_NAME = 6022,
    APP_IFACE_ACT_ABOUT_STIP = 6023,
    APP_IFACE_ACT_SETTINGS_NAME = 6042,
    APP_IFACE_ACT_SETTINGS_STIP = 6043,
    APP_IFACE_ACT_HELPPAGE_NAME = 6045,
    APP_IFACE_ACT_HELPPAGE_STIP = 6046,
    APP_IFACE_ACT_REGISTER_NAME = 6047,
    APP_IFACE_ACT_REGISTER_STIP = 6048,
    APP_IFACE_ACT_PURCHASE_NAME = 6145,
    APP_IFACE_ACT_PURCHASE_STIP = 6146,
    APP_IFACE_ACT_CLEARLOG_NAME = 6110,
    APP_IFACE_ACT_CLEARLOG_STIP = 6111,
    APP_IFACE_ACT_EJECT_NAME = 6052,
    APP_IFACE_ACT_EJECT_STIP = 6053,
    APP_IFACE_ACT_REVERT_NAME = 6105,
    APP_IFACE_ACT_REVERT_STIP = 6106,
    APP_IFACE_ACT_NEWINSTANCE_NAME = 6107,
    APP_IFACE_ACT_NEWINSTANCE_STIP = 6108,
    APP_IFACE_ACT_OPENDISC_DVD = 6062,
    APP_IFACE_ACT_OPENDISC_HDDVD = 6063,
    APP_IFACE_ACT_OPENDISC_BRAY = 6064,
    APP_IFACE_ACT_OPENDISC_LOADING = 6065,
    APP_IFACE_ACT_OPENDISC_UNKNOWN = 6099,
    APP_IFACE_ACT_OPENDISC_NODISC = 6109,
    APP_IFACE_ACT_TTREE_TOGGLE = 6066,
    APP_IFACE_ACT_TTREE_SELECT_ALL = 6067,
    APP_IFACE_ACT_TTREE_UNSELECT_ALL = 6068,

    // Menus
    APP_IFACE_MENU_FILE = 6030,
    APP_IFACE_MENU_VIEW = 6031,
    APP_IFACE_MENU_HELP = 6032,
    APP_IFACE_MENU_TOOLBAR = 6034,
    APP_IFACE_MENU_SETTINGS = 6044,
    APP_IFACE_MENU_DRIVES = 6035,

    // About box and registration
    APP_IFACE_CANCEL_CONFIRM = 6041,
    APP_IFACE_FATAL_COMM = 6050,
    APP_IFACE_FATAL_MEM = 6051,
    APP_IFACE_GUI_VERSION = 6054,
    APP_IFACE_LATEST_VERSION = 6158,
    APP_IFACE_LICENSE_TYPE = 6055,
    APP_IFACE_EVAL_STATE = 6056,
    APP_IFACE_EVAL_EXPIRATION = 6057,
    APP_IFACE_PROG_EXPIRATION = 6142,
    APP_IFACE_WEBSITE_URL = 6159,
    APP_IFACE_VIDEO_FOLDER_NAME_WIN = 6058,
    APP_IFACE_VIDEO_FOLDER_NAME_MAC = 6059,
    APP_IFACE_VIDEO_FOLDER_NAME_LINUX = 6060,
    APP_IFACE_DEFAULT_FOLDER_NAME = 6061,
    APP_IFACE_MAIN_FRAME_INFO = 6069,
    APP_IFACE_MAIN_FRAME_MAKE_MKV = 6070,
    APP_IFACE_MAIN_FRAME_PROFILE = 6180,
    APP_IFACE_MAIN_FRAME_PROPERTIES = 6181,
    APP_IFACE_EMPTY_FRAME_INFO = 6075,
    APP_IFACE_EMPTY_FRAME_SOURCE = 6071,
    APP_IFACE_EMPTY_FRAME_TYPE = 6072,
    APP_IFACE_EMPTY_FRAME_LABEL = 6073,
    APP_IFACE_EMPTY_FRAME_PROTECTION = 6074,
    APP_IFACE_EMPTY_FRAME_DVD_MANUAL = 6084,
    APP_IFACE_REGISTER_TEXT = 6076,
    APP_IFACE_REGISTER_CODE_INCORRECT = 6077,
    APP_IFACE_REGISTER_CODE_NOT_SAVED = 6078,
    APP_IFACE_REGISTER_CODE_SAVED = 6079,

    // Settings dialog
    APP_IFACE_SETTINGS_IO_OPTIONS = 6080,
    APP_IFACE_SETTINGS_IO_AUTO = 6081,
    APP_IFACE_SETTINGS_IO_READ_RETRY = 6082,
    APP_IFACE_SETTINGS_IO_READ_BUFFER = 6083,
    APP_IFACE_SETTINGS_IO_NO_DIRECT_ACCESS = 6150,
    APP_IFACE_SETTINGS_IO_DARWIN_K2_WORKAROUND = 6151,
    APP_IFACE_SETTINGS_IO_SINGLE_DRIVE = 6168,
    APP_IFACE_SETTINGS_DVD_AUTO = 6085,
    APP_IFACE_SETTINGS_DVD_MIN_LENGTH = 6086,
    APP_IFACE_SETTINGS_DVD_SP_REMOVE = 6087,
    APP_IFACE_SETTINGS_AACS_KEY_DIR = 6088,
    APP_IFACE_SETTINGS_BDP_MISC = 6129,
    APP_IFACE_SETTINGS_BDP_DUMP_ALWAYS = 6130,
    APP_IFACE_SETTINGS_DEST_TYPE_NONE = 6089,
    APP_IFACE_SETTINGS_DEST_TYPE_AUTO = 6090,
    APP_IFACE_SETTINGS_DEST_TYPE_SEMIAUTO = 6091,
    APP_IFACE_SETTINGS_DEST_TYPE_CUSTOM = 6092,
    APP_IFACE_SETTINGS_DESTDIR = 6093,
    APP_IFACE_SETTINGS_GENERAL_MISC = 6094,
    APP_IFACE_SETTINGS_LOG_DEBUG_MSG = 6095,
    APP_IFACE_SETTINGS_DATA_DIR = 6167,
    APP_IFACE_SETTINGS_EXPERT_MODE = 6169,
    APP_IFACE_SETTINGS_SHOW_AVSYNC = 6170,
    APP_IFACE_SETTINGS_GENERAL_ONLINE_UPDATES = 6188,
    APP_IFACE_SETTINGS_ENABLE_INTERNET_ACCESS = 6187,
    APP_IFACE_SETTINGS_PROXY_SERVER = 6189,
    APP_IFACE_SETTINGS_TAB_GENERAL = 6096,
    APP_IFACE_SETTINGS_MSG_FAILED = 6097,
    APP_IFACE_SETTINGS_MSG_RESTART = 6098,
    APP_IFACE_SETTINGS_TAB_LANGUAGE = 6152,
    APP_IFACE_SETTINGS_LANG_INTERFACE = 6153,
    APP_IFACE_SETTINGS_LANG_PREFERRED = 6154,
    APP_IFACE_SETTINGS_LANGUAGE_AUTO = 6156,
    APP_IFACE_SETTINGS_LANGUAGE_NONE = 6157,
    APP_IFACE_SETTINGS_TAB_IO = 6164,
    APP_IFACE_SETTINGS_TAB_STREAMING = 6165,
    APP_IFACE_SETTINGS_TAB_PROT = 6166,
    APP_IFACE_SETTINGS_TAB_ADVANCED = 6172,
    APP_IFACE_SETTINGS_ADV_DEFAULT_PROFILE = 6173,
    APP_IFACE_SETTINGS_ADV_DEFAULT_SELECTION = 6174,
    APP_IFACE_SETTINGS_ADV_EXTERN_EXEC_PATH = 6175,
    APP_IFACE_SETTINGS_PROT_JAVA_PATH = 6177,
    APP_IFACE_SETTINGS_ADV_OUTPUT_FILE_NAME_TEMPLATE = 6178,
    APP_IFACE_SETTINGS_TAB_INTEGRATION = 6190,
    APP_IFACE_SETTINGS_INT_TEXT = 6191,
    APP_IFACE_SETTINGS_INT_HDR_PATH = 6192,

    // Backup dialog
    APP_IFACE_BACKUPDLG_TEXT_CAPTION = 6137,
    APP_IFACE_BACKUPDLG_TEXT = 6138,
    APP_IFACE_BACKUPDLG_FOLDER = 6139,
    APP_IFACE_BACKUPDLG_OPTIONS = 6147,
    APP_IFACE_BACKUPDLG_DECRYPT = 6148,

    // Drive info
    APP_IFACE_DRIVEINFO_LOADING = 6100,
    APP_IFACE_DRIVEINFO_UNMOUNTING = 6112,
    APP_IFACE_DRIVEINFO_WAIT = 6101,
    APP_IFACE_DRIVEINFO_NODISC = 6102,
    APP_IFACE_DRIVEINFO_DATADISC = 6103,
    APP_IFACE_DRIVEINFO_NONE = 6104,

    // Stream flags
    APP_IFACE_FLAGS_DIRECTORS_COMMENTS = 6125,
    APP_IFACE_FLAGS_ALT_DIRECTORS_COMMENTS = 6126,
    APP_IFACE_FLAGS_SECONDARY_AUDIO = 6127,
    APP_IFACE_FLAGS_FOR_VISUALLY_IMPAIRED = 6128,
    APP_IFACE_FLAGS_CORE_AUDIO = 6143,
    APP_IFACE_FLAGS_FORCED_SUBTITLES = 6144,
    APP_IFACE_FLAGS_PROFILE_SECONDARY_STREAM = 6171,

    // Item info panel
    APP_IFACE_ITEMINFO_SOURCE = 6119,
    APP_IFACE_ITEMINFO_TITLE = 6120,
    APP_IFACE_ITEMINFO_TRACK = 6121,
    APP_IFACE_ITEMINFO_ATTACHMENT = 6122,
    APP_IFACE_ITEMINFO_CHAPTER = 6123,
    APP_IFACE_ITEMINFO_CHAPTERS = 6124,

    // Title tree (also robot-mode value codes)
    APP_TTREE_TITLE = 6200,
    APP_TTREE_VIDEO = 6201,
    APP_TTREE_AUDIO = 6202,
    APP_TTREE_SUBPICTURE = 6203,
    APP_TTREE_ATTACHMENT = 6214,
    APP_TTREE_CHAPTERS = 6215,
    APP_TTREE_CHAPTER = 6216,
    APP_TTREE_FORCED_SUBTITLES = 6211,
    APP_TTREE_HDR_TYPE = 6204,
    APP_TTREE_HDR_DESC = 6205,
    DVD_TYPE_DISK = 6206,
    BRAY_TYPE_DISK = 6209,
    HDDVD_TYPE_DISK = 6212,
    MKV_TYPE_FILE = 6213,
    APP_TTREE_CHAP_DESC = 6207,
    APP_TTREE_ANGLE_DESC = 6210,

    // DVD manual mode
    APP_DVD_MANUAL_TITLE = 6220,
    APP_DVD_MANUAL_TEXT = 6225,
    APP_DVD_TITLES_COUNT = 6221,
    APP_DVD_COUNT_CELLS = 6222,
    APP_DVD_COUNT_PGC = 6223,
    APP_DVD_BROKEN_TITLE_ENTRY = 6224,

    // Single drive mode
    APP_SINGLE_DRIVE_TITLE = 6226,
    APP_SINGLE_DRIVE_TEXT = 6227,
    APP_SINGLE_DRIVE_ALL = 6228,
    APP_SINGLE_DRIVE_CAPTION = 6229,

    // Drive and disc system info
    APP_SI_DRIVEINFO = 6300,
    APP_SI_PROFILE = 6301,
    APP_SI_MANUFACTURER = 6302,
    APP_SI_PRODUCT = 6303,
    APP_SI_REVISION = 6304,
    APP_SI_SERIAL = 6305,
    APP_SI_FIRMWARE = 6306,
    APP_SI_FIRDATE = 6307,
    APP_SI_BECFLAGS = 6308,
    APP_SI_HIGHEST_AACS = 6309,
    APP_SI_DISCINFO = 6320,
    APP_SI_NODISC = 6321,
    APP_SI_DISCLOAD = 6322,
    APP_SI_CAPACITY = 6323,
    APP_SI_DISCTYPE = 6324,
    APP_SI_DISCSIZE = 6325,
    APP_SI_DISCRATE = 6326,
    APP_SI_DISCLAYERS = 6327,
    APP_SI_DISCCBL = 6329,
    APP_SI_DISCCBL25 = 6330,
    APP_SI_DISCCBL27 = 6331,
    APP_SI_DEVICE = 6332,
}

/// Look up a resource ID by its symbolic name.
pub fn resource_id(name: &str) -> Option<ResourceId> {
    RESOURCE_IDS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, id)| id)
}

/// Symbolic name of a resource ID, if it is one of the published ones.
pub fn resource_name(id: ResourceId) -> Option<&'static str> {
    RESOURCE_IDS
        .iter()
        .find(|&&(_, candidate)| candidate == id)
        .map(|&(name, _)| name)
}

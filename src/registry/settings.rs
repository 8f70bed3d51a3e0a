//! Block-ID registry of the user settings record.
//!
//! Каждая строка таблицы: вариант SettingId, числовой dbi-идентификатор блока и
//! схема значения. `ConnectionType` схемы не имеет — его разбирает
//! `settings::connection`.

use serde::{Serialize, Serializer};

use crate::schema::{FieldDef, Schema, F64, I32, I64, U16, U32, U64, U8};

const USER: Schema = Schema::Record(&[FieldDef::new("user_id", I32), FieldDef::new("dc_id", U32)]);

const WINDOW_POSITION: Schema = Schema::Record(&[
    FieldDef::new("x", I32),
    FieldDef::new("y", I32),
    FieldDef::new("w", I32),
    FieldDef::new("h", I32),
    FieldDef::new("moncrc", I32),
    FieldDef::new("maximized", I32),
]);

const TILE_BACKGROUND: Schema =
    Schema::Record(&[FieldDef::new("tile_day", I32), FieldDef::new("tile_night", I32)]);

const DC_OPTION_OLD: Schema = Schema::Record(&[
    FieldDef::new("dc_id", U32),
    FieldDef::new("host", Schema::Text),
    FieldDef::new("ip", Schema::Text),
    FieldDef::new("port", U32),
]);

const DOWNLOAD_PATH: Schema = Schema::Record(&[
    FieldDef::new("path", Schema::Text),
    FieldDef::new("bookmark", Schema::Bytes),
]);

const AUTO_DOWNLOAD: Schema = Schema::Record(&[
    FieldDef::new("photo", I32),
    FieldDef::new("audio", I32),
    FieldDef::new("gif", I32),
]);

const DIALOGS_MODE: Schema =
    Schema::Record(&[FieldDef::new("enabled", I32), FieldDef::new("mode", I32)]);

const THEME_KEY: Schema = Schema::Record(&[
    FieldDef::new("day", U64),
    FieldDef::new("night", U64),
    FieldDef::new("night_mode", U32),
]);

const CACHE_SETTINGS: Schema = Schema::Record(&[
    FieldDef::new("total_size_limit", I64),
    FieldDef::new("total_time_limit", I32),
]);

const RECENT_EMOJI_OLD_OLD: Schema = Schema::List(&Schema::Record(&[
    FieldDef::new("code", U32),
    FieldDef::new("count", U16),
]));

const RECENT_EMOJI_OLD: Schema = Schema::List(&Schema::Record(&[
    FieldDef::new("code", U64),
    FieldDef::new("count", U16),
]));

const EMOJI_VARIANTS_OLD: Schema = Schema::List(&Schema::Record(&[
    FieldDef::new("code", U32),
    FieldDef::new("variant", U64),
]));

const RECENT_STICKERS: Schema = Schema::List(&Schema::Record(&[
    FieldDef::new("id", U64),
    FieldDef::new("count", U16),
]));

const HIDDEN_PINNED_MESSAGES: Schema = Schema::List(&Schema::Record(&[
    FieldDef::new("peer", U64),
    FieldDef::new("msg", I32),
]));

const RECENT_EMOJI: Schema = Schema::List(&Schema::Record(&[
    FieldDef::new("emoji", Schema::Text),
    FieldDef::new("count", U16),
]));

const EMOJI_VARIANTS: Schema = Schema::List(&Schema::Record(&[
    FieldDef::new("emoji", Schema::Text),
    FieldDef::new("variant", U8),
]));

const MUTED_PEERS: Schema = Schema::List(&U64);

macro_rules! settings_table {
    ($( $variant:ident = $id:literal => $schema:expr ),* $(,)?) => {
        /// Settings field, one per known dbi block identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SettingId {
            $( $variant ),*
        }

        impl SettingId {
            pub const ALL: &'static [SettingId] = &[ $( SettingId::$variant ),* ];

            pub fn from_block_id(id: u32) -> Option<Self> {
                match id {
                    $( $id => Some(SettingId::$variant), )*
                    _ => None,
                }
            }

            pub const fn block_id(self) -> u32 {
                match self {
                    $( SettingId::$variant => $id ),*
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( SettingId::$variant => concat!("Dbi", stringify!($variant)) ),*
                }
            }

            /// Value schema; `None` for the specially parsed connection type.
            pub fn schema(self) -> Option<&'static Schema> {
                match self {
                    $( SettingId::$variant => $schema ),*
                }
            }
        }
    };
}

settings_table! {
    User = 0x01 => Some(&USER),
    ChatSizeMax = 0x03 => Some(&I32),
    MutePeer = 0x04 => Some(&U64),
    SendKey = 0x05 => Some(&I32),
    AutoStart = 0x06 => Some(&I32),
    StartMinimized = 0x07 => Some(&I32),
    SoundNotify = 0x08 => Some(&I32),
    WorkMode = 0x09 => Some(&I32),
    SeenTrayTooltip = 0x0a => Some(&I32),
    DesktopNotify = 0x0b => Some(&I32),
    AutoUpdate = 0x0c => Some(&I32),
    LastUpdateCheck = 0x0d => Some(&I32),
    WindowPosition = 0x0e => Some(&WINDOW_POSITION),
    DefaultAttach = 0x11 => Some(&I32),
    CatsAndDogs = 0x12 => Some(&I32),
    ReplaceEmojis = 0x13 => Some(&I32),
    AskDownloadPath = 0x14 => Some(&I32),
    DownloadPathOld = 0x15 => Some(&Schema::Text),
    Scale = 0x16 => Some(&I32),
    EmojiTabOld = 0x17 => Some(&I32),
    RecentEmojiOldOld = 0x18 => Some(&RECENT_EMOJI_OLD_OLD),
    LoggedPhoneNumber = 0x19 => Some(&Schema::Text),
    MutedPeers = 0x1a => Some(&MUTED_PEERS),
    NotifyView = 0x1c => Some(&I32),
    SendToMenu = 0x1d => Some(&I32),
    CompressPastedImage = 0x1e => Some(&I32),
    Lang = 0x1f => Some(&I32),
    LangFile = 0x20 => Some(&Schema::Text),
    TileBackground = 0x21 => Some(&TILE_BACKGROUND),
    AutoLock = 0x22 => Some(&I32),
    DialogLastPath = 0x23 => Some(&Schema::Text),
    RecentEmojiOld = 0x24 => Some(&RECENT_EMOJI_OLD),
    EmojiVariantsOld = 0x25 => Some(&EMOJI_VARIANTS_OLD),
    RecentStickers = 0x26 => Some(&RECENT_STICKERS),
    DcOptionOld = 0x27 => Some(&DC_OPTION_OLD),
    TryIPv6 = 0x28 => Some(&I32),
    SongVolume = 0x29 => Some(&I32),
    WindowsNotificationsOld = 0x30 => Some(&I32),
    IncludeMuted = 0x31 => Some(&I32),
    MegagroupSizeMax = 0x32 => Some(&I32),
    DownloadPath = 0x33 => Some(&DOWNLOAD_PATH),
    AutoDownload = 0x34 => Some(&AUTO_DOWNLOAD),
    SavedGifsLimit = 0x35 => Some(&I32),
    ShowingSavedGifsOld = 0x36 => Some(&I32),
    AutoPlay = 0x37 => Some(&I32),
    AdaptiveForWide = 0x38 => Some(&I32),
    HiddenPinnedMessages = 0x39 => Some(&HIDDEN_PINNED_MESSAGES),
    RecentEmoji = 0x3a => Some(&RECENT_EMOJI),
    EmojiVariants = 0x3b => Some(&EMOJI_VARIANTS),
    DialogsMode = 0x40 => Some(&DIALOGS_MODE),
    ModerateMode = 0x41 => Some(&I32),
    VideoVolume = 0x42 => Some(&I32),
    StickersRecentLimit = 0x43 => Some(&I32),
    NativeNotifications = 0x44 => Some(&I32),
    NotificationsCount = 0x45 => Some(&I32),
    NotificationsCorner = 0x46 => Some(&I32),
    ThemeKeyOld = 0x47 => Some(&U64),
    DialogsWidthRatioOld = 0x48 => Some(&F64),
    UseExternalVideoPlayer = 0x49 => Some(&I32),
    DcOptions = 0x4a => Some(&Schema::Bytes),
    MtpAuthorization = 0x4b => Some(&Schema::Bytes),
    LastSeenWarningSeenOld = 0x4c => Some(&I32),
    AuthSessionSettings = 0x4d => Some(&Schema::Bytes),
    LangPackKey = 0x4e => Some(&U64),
    ConnectionType = 0x4f => None,
    StickersFavedLimit = 0x50 => Some(&I32),
    SuggestStickersByEmoji = 0x51 => Some(&I32),
    SuggestEmoji = 0x52 => Some(&I32),
    TxtDomainString = 0x53 => Some(&Schema::Text),
    ThemeKey = 0x54 => Some(&THEME_KEY),
    CacheSettings = 0x56 => Some(&CACHE_SETTINGS),
    AnimationsDisabled = 0x57 => Some(&I32),
    ScalePercent = 0x58 => Some(&I32),
    PlaybackSpeed = 0x59 => Some(&I32),
    LanguagesKey = 0x5a => Some(&U64),
    CallSettings = 0x5b => Some(&Schema::Bytes),
    ApplicationSettings = 0x5c => Some(&Schema::Bytes),
    FallbackProductionConfig = 0x5e => Some(&Schema::Bytes),
}

impl Serialize for SettingId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

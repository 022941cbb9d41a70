use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the dedicated configuration file.
pub const CONFIG_FILENAME: &str = ".prismafix.toml";
/// Name of the npm manifest that may carry a `"prismafix"` section.
pub const PACKAGE_JSON_FILENAME: &str = "package.json";

/// Search root used when neither the command line nor a config file sets one.
pub const DEFAULT_ROOT: &str = "src/app/api";
/// File extensions processed by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts"];

/// Module whose enum imports are stripped.
pub const DEFAULT_MODULE: &str = "@prisma/client";
/// Type name inserted by annotation rules and the request-error fallback.
pub const DEFAULT_FALLBACK_TYPE: &str = "any";

/// Prisma namespace export; imports listing it first are removed.
pub const PRISMA_NAMESPACE: &str = "Prisma";
/// Token replaced with the fallback type.
pub const KNOWN_REQUEST_ERROR: &str = "Prisma.PrismaClientKnownRequestError";

/// Enums whose imports are removed, in rule order.
pub const DEFAULT_ENUM_SYMBOLS: &[&str] = &[
    "OrderStatus",
    "TicketStatus",
    "PaymentStatus",
    "TicketEscrowState",
    "TicketVerificationStatus",
    "ForumVisibility",
    "ForumTopicType",
];

/// Enum tokens and the string literal each becomes, in rule order.
pub const DEFAULT_ENUM_REPLACEMENTS: &[(&str, &str)] = &[
    // OrderStatus
    ("OrderStatus.PAID", "\"PAID\""),
    ("OrderStatus.PENDING", "\"PENDING\""),
    ("OrderStatus.DELIVERED", "\"DELIVERED\""),
    ("OrderStatus.COMPLETED", "\"COMPLETED\""),
    ("OrderStatus.CANCELLED", "\"CANCELLED\""),
    // TicketStatus
    ("TicketStatus.AVAILABLE", "\"AVAILABLE\""),
    ("TicketStatus.RESERVED", "\"RESERVED\""),
    ("TicketStatus.SOLD", "\"SOLD\""),
    // PaymentStatus
    ("PaymentStatus.SUCCEEDED", "\"SUCCEEDED\""),
    ("PaymentStatus.PENDING", "\"PENDING\""),
    // TicketEscrowState
    ("TicketEscrowState.HELD", "\"HELD\""),
    ("TicketEscrowState.RELEASED_TO_BUYER", "\"RELEASED_TO_BUYER\""),
    (
        "TicketEscrowState.RELEASED_BACK_TO_SELLER",
        "\"RELEASED_BACK_TO_SELLER\"",
    ),
    // TicketVerificationStatus
    ("TicketVerificationStatus.PENDING", "\"PENDING\""),
    ("TicketVerificationStatus.VERIFIED", "\"VERIFIED\""),
    ("TicketVerificationStatus.NEEDS_REVIEW", "\"NEEDS_REVIEW\""),
    ("TicketVerificationStatus.REJECTED", "\"REJECTED\""),
    // ForumVisibility
    ("ForumVisibility.VISIBLE", "\"VISIBLE\""),
    ("ForumVisibility.HIDDEN", "\"HIDDEN\""),
    ("ForumVisibility.DELETED", "\"DELETED\""),
    // ForumTopicType
    ("ForumTopicType.ARTIST", "\"ARTIST\""),
    ("ForumTopicType.TEAM", "\"TEAM\""),
    ("ForumTopicType.SHOW", "\"SHOW\""),
    ("ForumTopicType.OTHER", "\"OTHER\""),
];

/// Single-parameter callback methods, in rule order. `true` means the
/// callback is written `async (x) => ...`.
pub const SINGLE_PARAM_CALLBACKS: &[(&str, bool)] = &[
    ("map", false),
    ("map", true),
    ("filter", false),
    ("flatMap", false),
    ("find", false),
    ("some", false),
];

/// Width of the `=` banner around the summary.
pub const BANNER_WIDTH: usize = 60;

/// Set of folders to exclude by default.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("node_modules");
        s.insert(".next");
        s.insert(".git");
        s.insert("dist");
        s.insert("build");
        s
    })
}

pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;

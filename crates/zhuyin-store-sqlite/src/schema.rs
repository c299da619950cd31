//! SQL for the user-phrase store.
//!
//! The layout is fixed by the input-method engine that reads the file, so the
//! tables are created without `IF NOT EXISTS`: importing into a store that
//! already has them fails instead of appending to stale data.

pub const SCHEMA: &str = "
CREATE TABLE userphrase_v1 (
    time      INTEGER,
    user_freq INTEGER,
    max_freq  INTEGER,
    orig_freq INTEGER,
    length    INTEGER,
    phone_0   INTEGER,
    phone_1   INTEGER,
    phone_2   INTEGER,
    phone_3   INTEGER,
    phone_4   INTEGER,
    phone_5   INTEGER,
    phone_6   INTEGER,
    phone_7   INTEGER,
    phone_8   INTEGER,
    phone_9   INTEGER,
    phone_10  INTEGER,
    phrase    TEXT,
    PRIMARY KEY (
        phone_0, phone_1, phone_2, phone_3, phone_4, phone_5,
        phone_6, phone_7, phone_8, phone_9, phone_10, phrase
    )
);

-- Reserved for the engine's own settings; never populated here.
CREATE TABLE config_v1 (
    id    INTEGER,
    value INTEGER,
    PRIMARY KEY (id)
);
";

/// Positional insert of all 17 columns.
pub const INSERT_PHRASE: &str = "
INSERT INTO userphrase_v1 (
    time, user_freq, max_freq, orig_freq, length,
    phone_0, phone_1, phone_2, phone_3, phone_4, phone_5,
    phone_6, phone_7, phone_8, phone_9, phone_10,
    phrase
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)";

pub const SELECT_PHRASES: &str = "
SELECT
    time, user_freq, max_freq, orig_freq, length,
    phone_0, phone_1, phone_2, phone_3, phone_4, phone_5,
    phone_6, phone_7, phone_8, phone_9, phone_10,
    phrase
FROM userphrase_v1
ORDER BY rowid";

pub mod date_time;
pub mod email;
pub mod name;
pub mod national_id;
pub mod password_digest;
pub mod person_id;
pub mod priority;
pub mod profile;
pub mod status;
pub mod ticket_id;
pub mod title;
pub mod version;

pub use self::date_time::DateTime;
pub use self::email::Email;
pub use self::name::Name;
pub use self::national_id::NationalId;
pub use self::password_digest::PasswordDigest;
pub use self::person_id::PersonId;
pub use self::priority::Priority;
pub use self::profile::Profile;
pub use self::status::Status;
pub use self::ticket_id::TicketId;
pub use self::title::Title;
pub use self::version::Version;

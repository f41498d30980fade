//! Generates synthetic user profiles and saves them as pretty-printed JSON.
//!
//! Each [`Profile`] has a name, email, age and city. Every field is drawn
//! uniformly and independently from fixed reference lists (see [`reference`]).
//! No uniqueness is enforced, so duplicates are expected for large counts.
//!
//! # Output Format
//!
//! A JSON array of objects with the keys `name`, `email`, `age`, `city` in that
//! order, indented by two spaces:
//!
//! ```json
//! [
//!   {
//!     "name": "Alice Smith",
//!     "email": "alice.smith417@gmail.com",
//!     "age": 34,
//!     "city": "Chicago"
//!   }
//! ]
//! ```
//!
//! # Usage
//!
//! ```no_run
//! let profiles = profile_gen::save_profiles(10, "profiles.json")?;
//! assert_eq!(profiles.len(), 10);
//! # Ok::<(), profile_gen::Error>(())
//! ```

pub mod error;
pub mod output;
pub mod profile;
pub mod reference;

pub use error::Error;
pub use output::{save_profiles, save_profiles_with, write_profiles};
pub use profile::{Profile, ProfileGenerator, generate_profile, generate_profiles};

/// Number of profiles generated when no count is given
pub const DEFAULT_COUNT: usize = 10;

/// Output file used when no path is given
pub const DEFAULT_OUTPUT: &str = "profiles.json";

/// Convert a signed count (as accepted on the command line) into a profile count.
pub fn profile_count(count: i64) -> Result<usize, Error> {
    if count < 0 {
        return Err(Error::InvalidCount { count });
    }
    usize::try_from(count).map_err(|_| Error::CountTooLarge { count })
}

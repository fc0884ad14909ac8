pub use contact_details::ContactDetails;
pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use errors::MalformedInput;

mod contact_details;
mod contact_email;
mod contact_name;
mod errors;

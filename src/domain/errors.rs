use custom_error::custom_error;

custom_error! {
/// Console input that cannot become a `ContactName` or a `ContactEmail`.
pub MalformedInput
    EmptyName = "Name cannot be empty",
    EmptyEmail = "Email cannot be empty",
    InvalidEmailFormat{email:String} = "Email must contain '@' symbol",
}

pub mod credential;

/*
 One row per account. The username is the login identifier and the primary
 key; the email is unique but not an identifier. The digest/key pair is
 written together on registration and on every secret change, never one
 without the other.
 */

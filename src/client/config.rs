pub mod remote {
    pub const BASE_URL: &str = "https://wpcs2.herokuapp.com";
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.157 Safari/537.36";
    pub const ACCEPT_LANGUAGE: &str = "ja-JP,ja;q=0.9,en-US;q=0.8,en;q=0.7";
    pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3";
    pub const ACCEPT_ANY: &str = "*/*";
}
pub mod login {
    pub const PATH: &str = "users/sign_in";
    pub const UTF8: &str = "\u{2713}";
    pub const COMMIT: &str = "\u{30ed}\u{30b0}\u{30a4}\u{30f3}";
    pub const REMEMBER_ME: &str = "0";
}
pub mod relay {
    pub const ADDRESS: &str = "127.0.0.1:14716";
}
pub mod env {
    pub const IDENTITY: &str = "WPCS2_ID";
    pub const SECRET: &str = "WPCS2_PASS";
    pub const CONTEST: &str = "WPCS2_CID";
    pub const BASE_URL: &str = "WPCS2_URL";
}

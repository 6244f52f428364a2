pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct UpdateProfileInput {
    pub email: String,
    pub username: String,
    pub password: Option<String>,
}

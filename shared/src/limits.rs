pub struct Limits {
    // Account form limits
    pub max_name_length: usize,
    pub max_email_length: usize,
    pub max_phone_length: usize,
    pub max_password_length: usize,

    // Order and menu form limits
    pub max_instructions_length: usize,
    pub max_meal_name_length: usize,
    pub max_meal_description_length: usize,
    pub max_meal_price: u32,
}

pub static LIMITS: Limits = Limits {
    max_name_length: 64,
    max_email_length: 254,
    max_phone_length: 20,
    max_password_length: 128,

    max_instructions_length: 500,
    max_meal_name_length: 80,
    max_meal_description_length: 400,
    max_meal_price: 10_000,
};

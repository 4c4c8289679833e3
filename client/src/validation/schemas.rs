//! Rule tables for each form.

use super::{Check, Rule, Schema};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const FULLNAME: &str = "fullname";
pub const ROLE: &str = "role";
pub const CLASSNAME: &str = "classname";
pub const CLASS_NAME: &str = "class_name";

pub const LOGIN: Schema = Schema {
    fields: &[
        (EMAIL, &[Rule { check: Check::Required, message: "Email is required" }]),
        (
            PASSWORD,
            &[
                Rule { check: Check::Required, message: "Password is required" },
                Rule { check: Check::MinLen(8), message: "password must be 8 characters" },
                Rule { check: Check::MaxLen(30), message: "password must not exceed 30 characters" },
                Rule { check: Check::HasUppercase, message: "password must contain one uppercase" },
                Rule { check: Check::HasDigit, message: "password must contain one number" },
                Rule { check: Check::HasSpecial, message: "password must contain one special character" },
            ],
        ),
    ],
};

pub const INPUT_MEMBER: Schema = Schema {
    fields: &[
        (
            EMAIL,
            &[
                Rule { check: Check::Required, message: "Email is required" },
                Rule { check: Check::Email, message: "Email is invalid" },
                Rule { check: Check::MinLen(8), message: "Email must be at least 8 characters" },
                Rule { check: Check::MaxLen(75), message: "Email must not exceed 75 characters" },
            ],
        ),
        (
            FULLNAME,
            &[
                Rule { check: Check::Required, message: "Fullname is required" },
                Rule { check: Check::MinLen(5), message: "Fullname is too short" },
                Rule { check: Check::MaxLen(50), message: "Fullname is too long" },
                Rule { check: Check::HasUppercase, message: "Fullname must contain one uppercase" },
            ],
        ),
        (
            PASSWORD,
            &[
                Rule { check: Check::Required, message: "Password is required" },
                Rule { check: Check::MinLen(8), message: "Password must be at least 8 characters" },
                Rule { check: Check::MaxLen(30), message: "Password must not exceed 30 characters" },
                Rule { check: Check::HasUppercase, message: "Password must contain one uppercase" },
                Rule { check: Check::HasDigit, message: "Password must contain one number" },
                Rule { check: Check::HasSpecial, message: "Password must contain one special character" },
            ],
        ),
        (ROLE, &[Rule { check: Check::Required, message: "Role is required" }]),
        (CLASSNAME, &[Rule { check: Check::Required, message: "Class is required" }]),
    ],
};

pub const INPUT_CLASS: Schema = Schema {
    fields: &[(
        CLASS_NAME,
        &[
            Rule { check: Check::Required, message: "Class name is required" },
            Rule { check: Check::MinLen(3), message: "Class name is too short" },
            Rule { check: Check::MaxLen(50), message: "Class name is too long" },
        ],
    )],
};

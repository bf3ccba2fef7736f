use staffbook::mapping::{MapEnum as _, MapValue, ValueKind};
use staffbook::{MapEnum, Mappable};

#[derive(MapEnum, Debug, Clone, Copy, PartialEq, Default)]
#[repr(u8)]
enum Role {
    #[default]
    User = 1,
    #[mapper(rename = "Administrator")]
    Admin = 2,
}

#[derive(Mappable, Default)]
struct Account {
    role: Role,
    previous: Option<Role>,
}

fn main() {
    let info = Role::enum_info();
    assert_eq!(info.repr, ValueKind::U8);
    assert_eq!(info.discriminant_of("administrator"), Some(2));

    let value = Role::Admin.to_value();
    assert_eq!(Role::from_value(value), Some(Role::Admin));

    let account = Account::default();
    assert_eq!(account.role, Role::User);
    assert_eq!(account.previous, None);
}

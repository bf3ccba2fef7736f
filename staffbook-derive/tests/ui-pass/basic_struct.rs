use staffbook::Mappable;
use staffbook::mapping::Mapper;

#[derive(Mappable)]
struct SignUp {
    name: Option<String>,
    age: Option<String>,
}

#[derive(Mappable, Default)]
struct Account {
    #[mapper(read_only)]
    id: i32,
    name: String,
    age: Option<i32>,
}

fn main() {
    let mapper = Mapper::new();
    let signup = SignUp {
        name: Some("Ada".to_string()),
        age: Some("36".to_string()),
    };
    let account: Account = mapper.create_and_map(&signup, &[]);
    assert_eq!(account.id, 0);
    assert_eq!(account.name, "Ada");
    assert_eq!(account.age, Some(36));
}

use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Auth,
    Profile,
    Cart,
    Checkout,
    Orders,
    Favorites,
}

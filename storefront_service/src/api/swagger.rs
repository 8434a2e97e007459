use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Collections
        crate::api::collections::get_collections::get_collections_handler,
        crate::api::collections::get_collection::get_collection_handler,
        crate::api::collections::create_collection::create_collection_handler,
        crate::api::collections::update_collection::update_collection_handler,
        crate::api::collections::delete_collection::delete_collection_handler,
        // Products
        crate::api::products::get_products::get_products_handler,
        crate::api::products::get_product::get_product_handler,
        crate::api::products::create_product::create_product_handler,
        crate::api::products::update_product::update_product_handler,
        crate::api::products::delete_product::delete_product_handler,
        // Carts
        crate::api::carts::create_cart::create_cart_handler,
        crate::api::carts::get_cart::get_cart_handler,
        crate::api::carts::delete_cart::delete_cart_handler,
        crate::api::carts::add_cart_item::add_cart_item_handler,
        crate::api::carts::update_cart_item::update_cart_item_handler,
        crate::api::carts::remove_cart_item::remove_cart_item_handler,
        // Orders
        crate::api::orders::place_order::place_order_handler,
        crate::api::orders::get_orders::get_orders_handler,
        crate::api::orders::get_order::get_order_handler,
        // Customers
        crate::api::customers::get_customers::get_customers_handler,
        crate::api::customers::get_me::get_me_handler,
        crate::api::customers::update_me::update_me_handler,
        // Reviews
        crate::api::reviews::get_reviews::get_reviews_handler,
        crate::api::reviews::create_review::create_review_handler,
        crate::api::reviews::update_review::update_review_handler,
        crate::api::reviews::delete_review::delete_review_handler,
    ),
    components(
        schemas(
            models_storefront::catalog::Collection,
            models_storefront::catalog::CollectionWithCount,
            models_storefront::cart::Cart,
            models_storefront::cart::CartItem,
            models_storefront::cart::CartProduct,
            models_storefront::customer::Customer,
            models_storefront::customer::Membership,
            models_storefront::order::Order,
            models_storefront::order::OrderItem,
            models_storefront::order::OrderWithItems,
            models_storefront::order::PaymentStatus,
            models_storefront::review::Review,
            crate::api::collections::create_collection::CreateCollectionRequest,
            crate::api::products::ProductRequest,
            crate::api::products::ProductResponse,
            crate::api::products::get_products::ProductsPageResponse,
            crate::api::carts::CartResponse,
            crate::api::carts::CartItemResponse,
            crate::api::carts::add_cart_item::AddCartItemRequest,
            crate::api::carts::update_cart_item::UpdateCartItemRequest,
            crate::api::orders::place_order::PlaceOrderRequest,
            crate::api::customers::update_me::UpdateCustomerRequest,
            crate::api::reviews::ReviewRequest,
        )
    ),
    tags(
        (name = "storefront service", description = "Storefront REST API")
    )
)]
pub struct ApiDoc;

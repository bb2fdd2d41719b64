use crate::layout::header::NAV_LINKS;
use crate::shared::catalog::site_config;
use crate::shared::locale::use_locale;
use chrono::Datelike;
use contracts::enums::Category;
use contracts::order::build_chat_url;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;
use leptos_router::components::A;

fn collection_links() -> [(Category, TextKey); 3] {
    [
        (Category::Men, TextKey::FooterMenFragrances),
        (Category::Women, TextKey::FooterWomenFragrances),
        (Category::Luxury, TextKey::FooterLuxuryPacks),
    ]
}

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_locale();
    let config = site_config();
    let current_year = chrono::Utc::now().year();

    view! {
        <footer data-zone="footer" class="footer" dir=move || i18n.dir()>
            <div class="footer__grid">
                <div class="footer__column">
                    <h3 class="footer__brand">{config.brand.name.clone()}</h3>
                    <p>{move || i18n.t(TextKey::FooterBrandDesc)}</p>
                    <p class="footer__muted">{move || i18n.t(TextKey::FooterPremium)}</p>
                </div>

                <div class="footer__column">
                    <h4>{move || i18n.t(TextKey::FooterQuickLinks)}</h4>
                    <ul>
                        {NAV_LINKS.into_iter().map(|(path, key)| view! {
                            <li><A href=path>{move || i18n.t(key)}</A></li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4>{move || i18n.t(TextKey::FooterCollections)}</h4>
                    <ul>
                        {collection_links().into_iter().map(|(category, key)| {
                            let href = format!("/shop?category={}", category.slug());
                            view! {
                                <li><A href=href>{move || i18n.t(key)}</A></li>
                            }
                        }).collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4>{move || i18n.t(TextKey::FooterContact)}</h4>
                    <ul>
                        <li>
                            <a href=build_chat_url(&config.contact.whatsapp_phone) target="_blank" rel="noopener noreferrer">
                                {move || i18n.t(TextKey::FooterWhatsappOrder)}
                            </a>
                        </li>
                        <li>
                            <a href=format!("mailto:{}", config.contact.email)>
                                {move || i18n.t(TextKey::FooterEmailUs)}
                            </a>
                        </li>
                        <li>
                            <a href=config.contact.instagram_url.clone() target="_blank" rel="noopener noreferrer">
                                {move || i18n.t(TextKey::FooterInstagram)}
                            </a>
                        </li>
                        <li class="footer__muted">{move || i18n.t(TextKey::FooterMorocco)}</li>
                    </ul>
                </div>
            </div>

            <div class="footer__bottom">
                <p>
                    {format!("© {} {}. ", current_year, config.brand.full_name)}
                    {move || i18n.t(TextKey::FooterRights)}
                </p>
                <p class="footer__muted">{move || i18n.t(TextKey::FooterCrafted)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_links_cover_all_categories() {
        let categories: Vec<Category> = collection_links().iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, Category::all().to_vec());
    }
}

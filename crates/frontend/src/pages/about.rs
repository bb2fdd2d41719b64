use crate::shared::catalog::site_config;
use crate::shared::components::{stagger_delay, CardAnimated};
use crate::shared::head::use_page_meta;
use crate::shared::icons::icon;
use contracts::shared::seo::{page_meta, SitePage};
use leptos::prelude::*;

/// (иконка, заголовок, текст)
const VALUES: [(&str, &str, &str); 3] = [
    (
        "sparkles",
        "Premium Quality",
        "We use only the finest ingredients sourced from ethical suppliers around the world. \
         Every bottle is carefully crafted using traditional methods combined with modern perfumery expertise.",
    ),
    (
        "map-pin",
        "Moroccan Heritage",
        "We honor Morocco's rich perfuming traditions while embracing contemporary creativity. \
         Our fragrances celebrate the country's culture, landscapes, and timeless elegance.",
    ),
    (
        "heart",
        "Pure Passion",
        "Every fragrance is crafted with passion and dedicated attention to detail. \
         We're not just creating perfumes; we're creating moments of luxury and memories that last a lifetime.",
    ),
];

/// Этапы создания аромата: (номер, название, описание)
const CRAFT_STEPS: [(&str, &str, &str); 4] = [
    ("01", "Selection", "Sourcing finest ingredients"),
    ("02", "Blending", "Masterful composition"),
    ("03", "Testing", "Quality assurance"),
    ("04", "Packaging", "Luxury presentation"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    use_page_meta(|| page_meta(SitePage::About, site_config()));

    let brand_name = site_config().brand.full_name.clone();

    view! {
        <div class="page page--about">
            <header class="page-header page-header--dark">
                <h1 class="page-header__title">"Our " <span class="text-gold">"Story"</span></h1>
                <p class="page-header__subtitle">
                    "Crafting luxury fragrances inspired by the rich heritage and mystique of Morocco"
                </p>
            </header>

            <section class="about-story">
                <div class="about-story__text">
                    <h2 class="section-title">"Born from " <span class="text-gold">"Passion"</span></h2>
                    <p>
                        {format!(
                            "{} was founded with a simple yet profound vision: to bring the essence of \
                             Moroccan elegance and oriental mystique to the world through luxury fragrances. \
                             Our journey began in the bustling souks of Morocco, where we discovered \
                             centuries-old perfuming traditions passed down through generations.",
                            brand_name,
                        )}
                    </p>
                    <p>
                        "Every fragrance in our collection tells a story, a story of craftsmanship, heritage, \
                         and an unwavering commitment to premium quality. We believe that a great fragrance \
                         is more than just a scent; it's an experience, a memory, a moment of luxury captured \
                         in a bottle."
                    </p>
                    <p>
                        "From the sun-drenched markets of Marrakech to the serene gardens of Fes, we draw \
                         inspiration from Morocco's most beautiful and aromatic landscapes."
                    </p>
                </div>
                <div class="about-story__image">{icon("map-pin")}</div>
            </section>

            <section class="about-values">
                <h2 class="section-title">"Our Core " <span class="text-gold">"Values"</span></h2>
                <div class="about-values__grid">
                    {VALUES.into_iter().enumerate().map(|(index, (icon_name, title, text))| view! {
                        <CardAnimated delay_ms=stagger_delay(index) class="value-card">
                            <div class="value-card__icon">{icon(icon_name)}</div>
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </CardAnimated>
                    }).collect_view()}
                </div>
            </section>

            <section class="about-craft">
                <h2 class="section-title">"Artisanal " <span class="text-gold">"Craftsmanship"</span></h2>
                <p class="section-subtitle">
                    "Each fragrance is meticulously crafted by our master perfumers using a blend of \
                     traditional techniques and modern innovation. We believe in the power of storytelling \
                     through scent."
                </p>
                <div class="about-craft__steps">
                    {CRAFT_STEPS.into_iter().map(|(step, title, desc)| view! {
                        <div class="craft-step">
                            <p class="craft-step__number">{step}</p>
                            <h4>{title}</h4>
                            <p>{desc}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craft_steps_numbered_in_order() {
        for (index, (step, _, _)) in CRAFT_STEPS.iter().enumerate() {
            assert_eq!(*step, format!("{:02}", index + 1));
        }
    }

    #[test]
    fn test_core_values() {
        let titles: Vec<&str> = VALUES.iter().map(|(_, title, _)| *title).collect();
        assert_eq!(titles, vec!["Premium Quality", "Moroccan Heritage", "Pure Passion"]);
    }
}

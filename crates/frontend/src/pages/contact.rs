use crate::shared::catalog::site_config;
use crate::shared::components::{stagger_delay, ButtonVariant, CardAnimated, WhatsAppButton};
use crate::shared::head::use_page_meta;
use crate::shared::icons::icon;
use contracts::order::{build_chat_url, OrderIntent};
use contracts::shared::seo::{page_meta, SitePage};
use leptos::prelude::*;

/// Заказ без привязки к товару каталога
const INQUIRY: OrderIntent<'static> = OrderIntent::Inquiry {
    name: "Perfume Inquiry",
    price: 49.0,
};

const FAQ: [(&str, &str); 6] = [
    (
        "How long does shipping take?",
        "Shipping varies by location. Contact us via WhatsApp for specific delivery information to your area.",
    ),
    (
        "What is your return policy?",
        "We want you to love your fragrance! If you're not satisfied, we offer a simple return process. Contact us for details.",
    ),
    (
        "Are your fragrances authentic?",
        "Yes! Every fragrance is handcrafted using premium ingredients and traditional Moroccan methods.",
    ),
    (
        "Can I customize fragrance orders?",
        "Absolutely! We offer customization and special requests. Message us on WhatsApp to discuss your preferences.",
    ),
    (
        "Do you offer gift wrapping?",
        "Yes, we provide luxury gift wrapping for all orders. Perfect for special occasions!",
    ),
    (
        "What is the shelf life of your fragrances?",
        "Our fragrances maintain their quality for 3+ years when stored properly in a cool, dark place.",
    ),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    use_page_meta(|| page_meta(SitePage::Contact, site_config()));

    let config = site_config();
    let chat_url = build_chat_url(&config.contact.whatsapp_phone);
    let mailto = format!("mailto:{}", config.contact.email);

    view! {
        <div class="page page--contact">
            <header class="page-header">
                <h1 class="page-header__title">"Get in " <span class="text-gold">"Touch"</span></h1>
                <p class="page-header__subtitle">
                    "Have questions about our fragrances? We're here to help! \
                     Reach out to us via WhatsApp for the fastest response."
                </p>
            </header>

            <section class="contact-cards">
                <CardAnimated delay_ms=stagger_delay(0) class="contact-card">
                    <div class="contact-card__icon">{icon("whatsapp")}</div>
                    <h3>"WhatsApp (Recommended)"</h3>
                    <p>"Chat with us directly for orders or inquiries. We respond within minutes!"</p>
                    <a href=chat_url target="_blank" rel="noopener noreferrer" class="btn btn--primary">
                        "Message on WhatsApp"
                    </a>
                </CardAnimated>
                <CardAnimated delay_ms=stagger_delay(1) class="contact-card">
                    <div class="contact-card__icon">{icon("mail")}</div>
                    <h3>"Email Us"</h3>
                    <p>"Send us an email and we'll get back to you as soon as possible."</p>
                    <a href=mailto class="btn btn--outline">"Send Email"</a>
                </CardAnimated>
                <CardAnimated delay_ms=stagger_delay(2) class="contact-card">
                    <div class="contact-card__icon">{icon("map-pin")}</div>
                    <h3>"Visit Us"</h3>
                    <p>"Morocco"</p>
                    <p class="contact-card__muted">
                        {format!(
                            "Crafting luxury fragrances in the heart of Morocco since {}",
                            config.brand.established
                        )}
                    </p>
                </CardAnimated>
            </section>

            <section class="cta">
                <h2 class="section-title">"Ready to " <span class="text-gold">"Order?"</span></h2>
                <p>
                    "The easiest way to order our fragrances is through WhatsApp. \
                     Just click the button below and share your order!"
                </p>
                <WhatsAppButton intent=INQUIRY variant=ButtonVariant::Secondary />
            </section>

            <section class="faq">
                <h2 class="section-title">"Frequently Asked " <span class="text-gold">"Questions"</span></h2>
                {FAQ.into_iter().map(|(question, answer)| view! {
                    <details class="faq__item">
                        <summary>{question}</summary>
                        <p>{answer}</p>
                    </details>
                }).collect_view()}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_entries() {
        let questions: Vec<&str> = FAQ.iter().map(|(q, _)| *q).collect();
        assert_eq!(
            questions,
            vec![
                "How long does shipping take?",
                "What is your return policy?",
                "Are your fragrances authentic?",
                "Can I customize fragrance orders?",
                "Do you offer gift wrapping?",
                "What is the shelf life of your fragrances?",
            ]
        );
        assert!(FAQ[5].1.contains("3+ years"));
        for (_, answer) in FAQ {
            assert!(!answer.contains("on delivery"));
        }
    }

    #[test]
    fn test_inquiry_intent() {
        assert_eq!(INQUIRY.price(), 49.0);
        assert_eq!(INQUIRY.display_name(contracts::enums::Locale::En), "Perfume Inquiry");
    }
}

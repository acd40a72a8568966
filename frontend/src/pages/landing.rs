use crate::components::carousel::{Carousel, Slide};
use crate::components::comparison_slider::ComparisonImages;
use crate::components::header::Header;
use crate::form::contact_form::ContactForm;
use crate::utils::dom::scroll_to_id;
use yew::prelude::*;

fn gallery_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Classic Roofline",
            caption: "Warm white C9 bulbs traced along every peak and gable.",
            images: ComparisonImages {
                before_src: "/assets/gallery/roofline-before.jpg",
                after_src: "/assets/gallery/roofline-after.jpg",
                alt: "Two-story home roofline",
            },
        },
        Slide {
            title: "Trees & Landscaping",
            caption: "Wrapped trunks, canopy mini-lights and lit walkways.",
            images: ComparisonImages {
                before_src: "/assets/gallery/trees-before.jpg",
                after_src: "/assets/gallery/trees-after.jpg",
                alt: "Front yard oak trees",
            },
        },
        Slide {
            title: "Storefront",
            caption: "Commercial displays that stay on from dusk until close.",
            images: ComparisonImages {
                before_src: "/assets/gallery/storefront-before.jpg",
                after_src: "/assets/gallery/storefront-after.jpg",
                alt: "Main street storefront",
            },
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_id("contact"));

    html! {
        <div class="landing-page">
            <Header />
            <section class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Professional Christmas Light Installation"}</h1>
                    <p class="hero-subtitle">
                        {"We design, install, maintain and take down your holiday lights. You just enjoy the glow."}
                    </p>
                    <button class="hero-cta" onclick={to_contact}>{"Get Your Free Quote"}</button>
                </div>
            </section>

            <section id="services" class="services-section">
                <h2>{"What We Do"}</h2>
                <div class="services-grid">
                    <div class="service-card">
                        <h3>{"Custom Design"}</h3>
                        <p>{"Every display is measured and planned for your home."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Installation & Maintenance"}</h3>
                        <p>{"Commercial-grade lights, clips and timers, serviced all season."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Takedown & Storage"}</h3>
                        <p>{"We pack everything up in January and store it until next year."}</p>
                    </div>
                </div>
            </section>

            <section id="gallery" class="gallery-section">
                <h2>{"Before & After"}</h2>
                <p class="section-subtitle">{"Drag the handle or click the photo to compare."}</p>
                <Carousel slides={gallery_slides()} />
            </section>

            <section id="contact" class="contact-section">
                <h2>{"Request a Quote"}</h2>
                <p class="section-subtitle">{"Tell us about your home and we'll get back to you within 24 hours."}</p>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{"© Holiday Glow Lighting. Licensed & insured."}</p>
            </footer>

            <style>
                {r#"
    .form-group input.error,
    .form-group select.error,
    .form-group textarea.error {
        border-color: #DC143C !important;
        box-shadow: 0 0 10px rgba(220, 20, 60, 0.3) !important;
    }
    .field-error {
        animation: fadeIn 0.3s ease-in;
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(-10px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .contact-form.loading {
        opacity: 0.6;
        pointer-events: none;
    }
    .file-upload-area {
        border: 2px dashed #444444;
        background-color: #1a1a1a;
    }
    .file-upload-area.has-files {
        border-color: #228B22;
        background-color: rgba(34, 139, 34, 0.1);
    }
    .carousel-slide {
        display: none;
    }
    .carousel-slide.active {
        display: block;
    }
    .comparison-slider {
        position: relative;
        overflow: hidden;
        user-select: none;
    }
    .comparison-slider img {
        display: block;
        width: 100%;
    }
    .after-image {
        position: absolute;
        inset: 0;
    }
    .slider-handle {
        position: absolute;
        top: 0;
        bottom: 0;
        width: 4px;
        transform: translateX(-50%);
        background: #fff;
    }
    .nav-menu.active {
        display: flex;
    }
                "#}
            </style>
        </div>
    }
}

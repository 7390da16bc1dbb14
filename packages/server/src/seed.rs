use chrono::Utc;
use common::{BlockMeta, BlockRole, Bullets, HeroButtons, UserRole};
use sea_orm::sea_query::{Index, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;
use uuid::Uuid;

use crate::entity::{block, image, page, user};
use crate::utils::hash;

/// Slug of the page served at `/`.
pub const HOME_SLUG: &str = "home";

pub const HOME_TITLE: &str = "REEMS - Race & Engineering Elite Manufacturing Services";

/// A block as provisioned, before it is attached to a page.
struct BlockSeed {
    key: &'static str,
    role: BlockRole,
    title: Option<&'static str>,
    subtitle: Option<&'static str>,
    body: Option<&'static str>,
    bullets: &'static [&'static str],
    meta: BlockMeta,
}

impl BlockSeed {
    fn new(key: &'static str, meta: BlockMeta) -> Self {
        Self {
            key,
            role: BlockRole::Item,
            title: None,
            subtitle: None,
            body: None,
            bullets: &[],
            meta,
        }
    }

    fn header(mut self) -> Self {
        self.role = BlockRole::Header;
        self
    }

    fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    fn subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    fn body(mut self, body: &'static str) -> Self {
        self.body = Some(body);
        self
    }

    fn bullets(mut self, bullets: &'static [&'static str]) -> Self {
        self.bullets = bullets;
        self
    }
}

fn capability(photos: &[&str], additional_text: Option<&str>) -> BlockMeta {
    BlockMeta::Capability {
        photos: photos.iter().map(|p| ToString::to_string(p)).collect(),
        additional_text: additional_text.map(str::to_string),
    }
}

/// The home page taxonomy in display order.
fn home_blocks() -> Vec<BlockSeed> {
    vec![
        BlockSeed::new(
            "hero",
            BlockMeta::Hero {
                buttons: HeroButtons {
                    primary: "Explore capabilities".into(),
                    secondary: "Request a project review".into(),
                },
            },
        )
        .title("Race & Engineering Elite Manufacturing Services")
        .subtitle(
            "Advanced magnesium, aluminium and titanium solutions for high-performance automotive, \
             aerospace and industrial applications.",
        )
        .body(
            "REEMS combines engineering, proprietary forging and additive technologies to deliver \
             ultra-light, high-strength components, from forged wheels to aerospace brackets and \
             complex 3D-printed parts.",
        ),
        BlockSeed::new(
            "intro",
            BlockMeta::Intro {
                cta_button: Some("Start your project".into()),
            },
        )
        .body(
            "REEMS facilitates manufacturing services for high-performance industries, from \
             motorsport to aerospace, specializing in forged magnesium & aluminum components, \
             advanced prototyping, and full production solutions.",
        )
        .bullets(&[
            "Lightweight Metal Expertise",
            "End-to-End Engineering (Design → Simulation → Serial Production)",
            "High-Performance Results (Strength, efficiency, certification)",
        ]),
        BlockSeed::new("market_segments_header", BlockMeta::MarketSegment)
            .header()
            .title("Market segments")
            .subtitle("Supplying ultra-light, certified components to global OEMs and Tier-1s"),
        BlockSeed::new("market_automotive", BlockMeta::MarketSegment)
            .title("Automotive")
            .body(
                "Magnesium and aluminium forged wheels and blanks, brake and suspension \
                 components, exhaust elements, interior structural parts, and 3D-printed custom \
                 parts (logos, ducts, emblems) for motorsport and premium vehicle programs.",
            )
            .bullets(&[
                "Forged magnesium & aluminium wheels",
                "Forged wheel blanks",
                "Brake brackets & cooling ducts",
                "Wrought / formed exhaust parts",
                "Automotive sheet components",
                "3D-printed metal parts",
            ]),
        BlockSeed::new("market_aerospace", BlockMeta::MarketSegment)
            .title("Aerospace")
            .body(
                "Precision light-alloy components for airframe, rotorcraft and space \
                 applications, including brackets, transmission housings, interior parts and \
                 turbine engine elements, produced to aerospace process control.",
            )
            .bullets(&[
                "Magnesium & aluminium brackets",
                "Transmission / gearbox casings",
                "Interior & seat structure parts",
                "Turbine engine components",
                "Forged wheels & blanks for ground support",
                "Magnesium antenna boxes",
            ]),
        BlockSeed::new("market_industrial", BlockMeta::MarketSegment)
            .title("Industrial & Material Supply")
            .body(
                "From raw magnesium feedstock to semi-finished products, REEMS supports \
                 manufacturers with chips, flakes, granules, powders, billets, sheets, extrusions \
                 and forged parts, plus CNC, surface protection and coating.",
            )
            .bullets(&[
                "Magnesium raw materials (chips, flakes, powders, granules)",
                "Billets, sheet, extrusion, forgings",
                "CNC machining services",
                "Sheet metal forming",
                "Surface protection: anodizing, PEO, PVD, powder coating",
            ]),
        BlockSeed::new("market_special", BlockMeta::MarketSegment)
            .title("Special Components")
            .body(
                "Engineering of difficult, lightweight parts for defence, telecoms, motorsport \
                 and space, including electromagnetic shielding materials, reinforced housings \
                 and complex 3D-printed geometries (SLM, WAAM).",
            )
            .bullets(&[
                "Forged magnesium casings",
                "Complex 3D-printed metal parts",
                "Hybrid / reinforced materials",
                "Carbon-carbon materials",
            ]),
        BlockSeed::new("lifecycle_intro", BlockMeta::LifecycleIntro)
            .title("Full product lifecycle")
            .body(
                "At REEMS we don't just forge a part, we engineer the whole lifecycle. Our team \
                 translates performance targets (weight, stiffness, thermal, fatigue) into \
                 manufacturable, cost-efficient light-alloy solutions.",
            ),
        BlockSeed::new("lifecycle_rd", BlockMeta::LifecycleStage)
            .title("Research & Development")
            .body(
                "Our engineering team has been involved in magnesium and advanced-alloy R&D \
                 together with leading OEMs and research institutes. We have expertise in \
                 developing proprietary alloys, forming routes and additive processes to increase \
                 strength, corrosion resistance and fatigue life for automotive and aerospace \
                 applications.",
            ),
        BlockSeed::new("lifecycle_engineering", BlockMeta::LifecycleStage)
            .title("Engineering & Prototyping")
            .body(
                "Each component is optimized for its final use. REEMS uses CAE tools (ANSYS / \
                 FEA, LS-DYNA, macro- to nano-mechanical simulations) and advanced \
                 reverse-engineering software (Geomagic, Materialise, SolidWorks, Siemens NX) to \
                 shorten prototype lead time and ensure formability before tool production.",
            ),
        BlockSeed::new("lifecycle_industrialization", BlockMeta::LifecycleStage)
            .title("Industrialization & Serial Production")
            .body(
                "Our proprietary closed-die, net-shape forging processes (6,000–30,000 t \
                 hydraulic force) deliver directional fibre flow and deep deformation, resulting \
                 in superior grain structure and outstanding fatigue/strength properties, ideal \
                 for wheels, suspension parts and aerospace brackets.",
            ),
        BlockSeed::new("lifecycle_testing", BlockMeta::LifecycleStage)
            .title("Testing & Certification")
            .body(
                "REEMS validates, tests and certifies parts to international industry standards. \
                 We provide mechanical, metallurgical and chemical testing, CMM, and partner with \
                 TÜV and other notified bodies for third-party certification.",
            ),
        BlockSeed::new("capabilities_header", capability(&[], None))
            .header()
            .title("Capabilities")
            .subtitle("Innovative materials and technologies"),
        BlockSeed::new(
            "capability_raw_materials",
            capability(
                &["Al/Mg granules", "Al/Mg billets", "Al/Mg powder", "Al/Mg wire feedstock"],
                None,
            ),
        )
        .title("Raw materials")
        .body(
            "Magnesium, aluminium and titanium materials in multiple formats: chips, flakes, \
             granules, powders, billets, slabs, sheets and extrusion stock. Ideal for casting, \
             forging, additive and hybrid manufacturing routes.",
        ),
        BlockSeed::new(
            "capability_forging",
            capability(
                &["wheel", "wheel net-shaped blank", "generic-blank", "forged ring"],
                None,
            ),
        )
        .title("Forging")
        .body(
            "Closed-die forging of magnesium, titanium and aluminium components, wheel blanks, \
             aerospace brackets, casings and structural parts with controlled metal flow and \
             fibre orientation for maximum mechanical properties.",
        )
        .bullets(&[
            "6,000–30,000 t hydraulic press range, size up to 30\"",
            "Near-net shape to reduce machining",
        ]),
        BlockSeed::new(
            "capability_extrusion_rolling",
            capability(
                &[
                    "CNC 5-axis",
                    "3D printed part (bracket)",
                    "colored wheel",
                    "rolled sheet (thin)",
                ],
                Some(
                    "Magnesium sheet as thin as 0,6 mm with the width of 1000 mm and length up \
                     to 15 000 mm.",
                ),
            ),
        )
        .title("Extrusion & Rolling")
        .body(
            "Profile extrusion and sheet forming for automotive and industrial parts, including \
             from magnesium alloys.",
        ),
        BlockSeed::new("capability_machining", capability(&[], None))
            .title("Machining")
            .body("CNC machining services for precision finishing and complex geometries."),
        BlockSeed::new(
            "capability_printing",
            capability(
                &[
                    "3D printed part (BCD)",
                    "3D printed part (bracket)",
                    "3D printed part (motor-part)",
                    "3D printed part (another bracket)",
                ],
                None,
            ),
        )
        .title("3D Printing")
        .body(
            "REEMS supports SLM (Selective Laser Melting) and other additive manufacturing \
             technologies for complex geometries and rapid prototyping.",
        ),
        BlockSeed::new(
            "capability_surface_protection",
            capability(
                &[
                    "wheel color 1",
                    "two-colored wheel",
                    "three-colored wheel",
                    "polished wheel",
                ],
                None,
            ),
        )
        .title("Surface Protection")
        .body("Surface protection according to application requirements.")
        .bullets(&[
            "Anodizing",
            "Plasma Electrolytic Oxidation (PEO)",
            "PVD",
            "Powder coating",
        ]),
        BlockSeed::new(
            "wheels",
            BlockMeta::Wheels {
                cta_button: Some("Send us your wheel specification".into()),
            },
        )
        .title("Forged aluminium and magnesium wheels")
        .subtitle("Motorsport-grade, road-ready, weight-optimized")
        .body(
            "REEMS designs and manufactures forged wheels and wheel blanks for performance, \
             motorsport and premium OEM programs. Using proprietary forging technology and \
             high-strength light alloys, we achieve an optimal balance between mass reduction, \
             stiffness and impact resistance, even for demanding racing environments.",
        )
        .bullets(&[
            "1-, 2- and 3-piece wheel concepts",
            "Magnesium and 2000/6000/7000-series aluminium",
            "Custom offsets, PCD and centre-lock variants",
            "Flow-optimized spokes and brake-cooling geometry",
            "Ready for premium surface finishing",
        ]),
        BlockSeed::new(
            "company",
            BlockMeta::Company {
                slogan: Some("Let's Build What Others Think Is Impossible.".into()),
            },
        )
        .title("Company")
        .subtitle("Race & Engineering Elite Manufacturing Services")
        .body(
            "REEMS is a European engineering and manufacturing company focused on light-alloy \
             solutions for mobility, aerospace and advanced industrial sectors. Building on two \
             decades of magnesium and aluminium know-how, we integrate forging, extrusion, CNC, \
             additive manufacturing and surface protection into one supply chain.\nOur mission \
             is to help OEMs and Tier-1s remove weight, improve performance and accelerate \
             time-to-market through intelligent materials and robust manufacturing processes.",
        ),
        BlockSeed::new("final_cta", BlockMeta::Cta).body(
            "Send us your design, problem, or challenge. Our engineering team will take it from \
             concept to production.",
        ),
    ]
}

/// Provision the home page with its fixed block taxonomy.
///
/// An existing home page is left untouched. Returns whether the page was
/// created.
pub async fn seed_home<C: ConnectionTrait + TransactionTrait>(db: &C) -> Result<bool, DbErr> {
    if page::Entity::find()
        .filter(page::Column::Slug.eq(HOME_SLUG))
        .one(db)
        .await?
        .is_some()
    {
        info!("Page '{}' already exists, leaving it untouched", HOME_SLUG);
        return Ok(false);
    }

    let txn = db.begin().await?;
    let now = Utc::now();
    let home = page::ActiveModel {
        id: Set(Uuid::now_v7()),
        slug: Set(HOME_SLUG.to_string()),
        title: Set(HOME_TITLE.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let seeds = home_blocks();
    let count = seeds.len();
    for (order, seed) in seeds.into_iter().enumerate() {
        let bullets: Option<Bullets> = (!seed.bullets.is_empty())
            .then(|| seed.bullets.iter().map(|b| ToString::to_string(b)).collect::<Vec<_>>().into());
        block::ActiveModel {
            id: Set(Uuid::now_v7()),
            page_id: Set(home.id),
            block_type: Set(seed.meta.block_type()),
            key: Set(seed.key.to_string()),
            role: Set(seed.role),
            title: Set(seed.title.map(str::to_string)),
            subtitle: Set(seed.subtitle.map(str::to_string)),
            body: Set(seed.body.map(str::to_string)),
            order: Set(order as i32),
            bullets: Set(bullets),
            meta: Set(seed.meta),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    info!("Created page '{}' with {} blocks", HOME_SLUG, count);
    Ok(true)
}

/// Create an operator account unless the email is already taken.
///
/// Returns whether the account was created.
pub async fn seed_user<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
    role: UserRole,
) -> Result<bool, DbErr> {
    if user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?
        .is_some()
    {
        info!("Operator {} already exists", email);
        return Ok(false);
    }

    let password_hash = hash::hash_password(password)
        .map_err(|e| DbErr::Custom(format!("failed to hash password: {e}")))?;
    let now = Utc::now();
    user::ActiveModel {
        id: Set(Uuid::now_v7()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        role: Set(role),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    info!("Created {} operator {}", role, email);
    Ok(true)
}

pub async fn seed_admin<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<bool, DbErr> {
    seed_user(db, email, password, UserRole::Admin).await
}

/// Ensure database indexes exist.
///
/// Schema sync does not create composite unique indexes, so they are
/// created here on startup. The `(page_id, key)` index backs a uniqueness
/// invariant and failing to create it is an error; the image lookup index
/// only speeds up page loads and a failure there is logged.
pub async fn ensure_indexes<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let statements = [
        (
            "idx_block_page_key",
            true,
            Index::create()
                .if_not_exists()
                .unique()
                .name("idx_block_page_key")
                .table(block::Entity)
                .col(block::Column::PageId)
                .col(block::Column::Key)
                .to_string(PostgresQueryBuilder),
        ),
        (
            "idx_image_block",
            false,
            Index::create()
                .if_not_exists()
                .name("idx_image_block")
                .table(image::Entity)
                .col(image::Column::BlockId)
                .to_string(PostgresQueryBuilder),
        ),
    ];

    for (name, required, stmt) in statements {
        match db.execute_unprepared(&stmt).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) if required => {
                tracing::error!("Failed to create index {}: {}", name, e);
                return Err(e);
            }
            Err(e) => tracing::warn!("Failed to create index {}: {}", name, e),
        }
    }

    Ok(())
}

//! Template banks for the mock backend
//!
//! Each content type has a default bank and, for most types, a regional
//! bank written in Nigerian Pidgin English. Lookups for a style without its
//! own bank fall back to the default one.

use crate::models::{ContentType, TemplateStyle};

/// Placeholder for the request topic
pub const TOPIC_PLACEHOLDER: &str = "{topic}";
/// Placeholder for the derived title
pub const TITLE_PLACEHOLDER: &str = "{title}";
/// Placeholder for the current calendar year
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Values substituted into a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues<'a> {
    pub topic: &'a str,
    pub title: &'a str,
    pub year: i32,
}

/// Title used for `{title}` and as the default content title
pub fn guide_title(topic: &str) -> String {
    format!("The Complete Guide to {}", topic)
}

/// Replace every placeholder occurrence in `template`
pub fn fill(template: &str, values: &TemplateValues<'_>) -> String {
    template
        .replace(TOPIC_PLACEHOLDER, values.topic)
        .replace(TITLE_PLACEHOLDER, values.title)
        .replace(YEAR_PLACEHOLDER, &values.year.to_string())
}

/// Prose variants for a content type and style
///
/// Returns an empty slice for types that have no prose skeleton (headline and
/// hashtag content is assembled from lists instead).
pub fn bank(content_type: ContentType, style: TemplateStyle) -> &'static [&'static str] {
    let regional: &'static [&'static str] = match content_type {
        ContentType::Blog => REGIONAL_BLOG,
        ContentType::Social => REGIONAL_SOCIAL,
        ContentType::Ad => REGIONAL_AD,
        ContentType::Email => REGIONAL_EMAIL,
        ContentType::Headline | ContentType::Hashtag => &[],
    };
    let default: &'static [&'static str] = match content_type {
        ContentType::Blog => DEFAULT_BLOG,
        ContentType::Social => DEFAULT_SOCIAL,
        ContentType::Ad => DEFAULT_AD,
        ContentType::Email => DEFAULT_EMAIL,
        ContentType::Headline | ContentType::Hashtag => &[],
    };

    match style {
        TemplateStyle::Regional if !regional.is_empty() => regional,
        _ => default,
    }
}

/// Headline skeletons, always ten
pub const HEADLINES: [&str; 10] = [
    "10 Proven Strategies for {topic} That Actually Work in {year}",
    "The Ultimate Guide to Mastering {topic} (For Beginners & Pros)",
    "Why {topic} Is the Secret Weapon of Successful Businesses",
    "How to Transform Your Results with {topic} in Just 7 Days",
    "{topic}: Everything You Need to Know to Get Started Today",
    "The Truth About {topic} That Nobody Is Talking About",
    "5 Mistakes to Avoid When Implementing {topic}",
    "From Zero to Hero: Your Complete {topic} Roadmap",
    "What Top Performers Know About {topic} (And You Don't)",
    "The Future of {topic}: Trends and Predictions for Success",
];

/// Candidate hashtags sampled for social and hashtag content
pub const HASHTAG_POOL: [&str; 20] = [
    "#ContentCreation",
    "#DigitalMarketing",
    "#BusinessGrowth",
    "#Entrepreneurship",
    "#SocialMediaMarketing",
    "#MarketingTips",
    "#BusinessStrategy",
    "#GrowthHacking",
    "#StartupLife",
    "#SmallBusiness",
    "#NigeriaTwitter",
    "#AfricaRising",
    "#LagosHustle",
    "#NaijaBusiness",
    "#AfricanEntrepreneur",
    "#TechAfrica",
    "#ContentMarketing",
    "#SEO",
    "#BrandBuilding",
    "#OnlineBusiness",
];

/// Keyword patterns filled with the lowercased topic
pub const KEYWORD_PATTERNS: [&str; 10] = [
    "{topic} guide",
    "{topic} tips",
    "{topic} strategies",
    "best {topic} practices",
    "how to {topic}",
    "{topic} for beginners",
    "{topic} tutorial",
    "{topic} examples",
    "{topic} tools",
    "{topic} benefits",
];

/// Writing suggestions offered while drafting
pub const CONTINUATION_SUGGESTIONS: [&str; 5] = [
    "Consider adding a call-to-action to engage your readers more effectively.",
    "You might want to include some statistics or data to support your points.",
    "Adding a personal story or anecdote could make this more relatable.",
    "Try breaking this into shorter paragraphs for better readability.",
    "Consider adding bullet points to highlight key takeaways.",
];

/// Markets referenced in regional production prompts
pub const MARKET_REFERENCES: [&str; 6] = [
    "Computer Village",
    "Alaba Market",
    "Balogun Market",
    "Onitsha Main Market",
    "Ariaria Market",
    "Wuse Market",
];

/// Cultural events referenced in regional production prompts
pub const CULTURAL_EVENTS: [&str; 6] = [
    "Felabration",
    "Lagos Fashion Week",
    "Calabar Carnival",
    "Eyo Festival",
    "New Yam Festival",
    "Durbar Festival",
];

/// Business slang the production model may use naturally
pub const BUSINESS_TERMS: [&str; 9] = [
    "hustle",
    "side hustle",
    "packaging",
    "levels",
    "secure the bag",
    "runs",
    "flex",
    "sapa",
    "japa",
];

const DEFAULT_BLOG: &[&str] = &["# {title}

Understanding {topic} has become essential for anyone who wants to grow in today's fast-moving digital world. Whether you have years of experience or you are just starting out, getting these ideas right gives you a real competitive edge.

## Why {topic} Matters

Markets keep shifting. Teams that take {topic} seriously report stronger engagement, better conversion rates and more loyal customers.

### Key Takeaways

1. **Start with a solid foundation** - learn the basics before anything else
2. **Embrace new ideas** - be willing to test fresh approaches
3. **Measure and iterate** - let the numbers guide your next move

## Getting Started

Begin by looking honestly at where you are today and where you want to be. With clear goals in place you can sketch a roadmap and work through it one step at a time.

> \"The secret of getting ahead is getting started.\" - Mark Twain

## Practical Tips

- **Audit your current process** - find the slow or broken parts
- **Set measurable goals** - track progress every week
- **Build a strong team** - good collaborators multiply results

## Conclusion

{topic} is no longer optional. Put these ideas to work today and watch your results change.

What has your experience with {topic} been? Share your thoughts in the comments below!"];

const REGIONAL_BLOG: &[&str] = &["# {title}

My people, make I tell una something important about {topic}. E no be small matter o! If you wan make am for this Naija and Africa business space, you need to understand this thing well well.

## Why {topic} Dey Important

See ehn, the way business dey run now don change plenty. Those wey dey use {topic} dey see better results: more customers dey engage, more people dey buy, and relationships dey strong.

### Wetin You Go Learn

1. **Start from the beginning** - understand the basics first
2. **No fear new things** - innovation na the way forward
3. **Check your numbers** - use data take decide

## How to Start

First thing, check where you dey now and where you wan reach. Once you sabi your goals, you fit plan the journey small small.

> \"The journey of a thousand miles begins with one step\" - as dem dey talk

## Things Wey You Fit Do Today

- **Look wetin you dey do now** - see where you fit improve
- **Set goals wey you fit measure** - track your progress
- **Build better team** - two heads better pass one

## Conclusion

{topic} don become necessary for everybody wey serious. Start today and watch your business grow!

Wetin be your own experience with {topic}? Drop comment below!"];

const DEFAULT_SOCIAL: &[&str] = &[
    "🚀 Big things are happening! I just found out how {topic} can transform a business, and the results are wild. 💡\n\nWhat I learned:\n✅ It's easier than you think\n✅ The ROI is incredible\n✅ Everyone should know this\n\nWho else is exploring {topic}? Let's connect! 🤝",
    "💡 Hot take on {topic}:\n\nMost people are doing it wrong.\n\nHere's the truth:\n→ Start small\n→ Be consistent\n→ Measure everything\n→ Iterate fast\n\nThe winners figured this out early.\n\nYour move. 🎯",
    "Thread 🧵: Why {topic} will define the next decade\n\n1/ We're at an inflection point\n2/ Early adopters are winning big\n3/ The barrier to entry has never been lower\n4/ Most people are still sleeping on it\n\nDon't be most people. Start today. 🔥",
];

const REGIONAL_SOCIAL: &[&str] = &[
    "Omo! 🔥 This {topic} thing na REAL!\n\nI just see how e fit change your business for better. No be small thing o!\n\nWetin I learn:\n✅ E no hard at all\n✅ The results dey mad\n✅ Everybody need know this\n\nWho else dey explore this matter? Make we link up! 🤝",
    "💡 Real talk about {topic}:\n\nPlenty people dey do am wrong sha.\n\nHear the correct way:\n→ Start small small\n→ Dey consistent\n→ Measure everything\n→ Adjust as you go\n\nThose wey understand this one don dey win. Na your turn. 🎯",
    "E be like say {topic} go change everything this decade!\n\nMake I tell you why:\n1/ The time na now\n2/ Those wey start early dey enjoy\n3/ E no hard to enter again\n4/ But plenty people still dey sleep\n\nNo be you go sleep o! Start today! 🚀",
];

const DEFAULT_AD: &[&str] = &["🎯 **LIMITED TIME OFFER**

Discover the {topic} Secret That Top Performers Keep to Themselves!

✨ **What You Get:**
• Proven strategies that work
• A step-by-step implementation guide
• Exclusive access to our community
• A 30-day money-back guarantee

🔥 **Why Choose Us?**
→ Trusted by 10,000+ customers
→ 5-star rated service
→ Results in just 7 days

⚡ **ACT NOW** - this offer ends soon!

👉 Click the link below to get started
🎁 Use code LAUNCH20 for 20% off

Don't miss out. Your transformation starts today."];

const REGIONAL_AD: &[&str] = &["🎯 **SPECIAL PROMO DEY RUN O!**

Find out the {topic} secret wey big boys no wan talk about!

✨ **Wetin You Go Get:**
• Strategies wey dey work for real
• Step-by-step guide
• Entry into our exclusive community
• If e no work, collect your money back - 30 days guarantee!

🔥 **Why You Go Choose Us?**
→ Over 10,000 customers don testify
→ 5-star rating everywhere
→ See results within 7 days!

⚡ **DO AM NOW** - this promo no go last!

👉 Click the link below make you start
🎁 Enter code NAIJA20 collect 20% discount!

No let this one pass you by o. Your time na NOW!"];

const DEFAULT_EMAIL: &[&str] = &["Subject: {topic} - Your Complete Guide Inside 📧

Hi there,

I hope this email finds you well!

I'm reaching out personally because I know how much {topic} matters to your success. After helping thousands of professionals reach their goals, I've gathered the most effective strategies into one guide.

**Here's what you'll discover:**

• The #1 mistake most people make (and how to avoid it)
• A simple 3-step framework for quick results
• Real case studies from people just like you
• Actionable tips you can use today

I've watched these strategies transform businesses and careers, and I want the same for you.

**Ready for the next step?**

Click here to get your free guide: [Link]

Questions? Just hit reply. I read every email personally.

To your success,
The AfroCreate Team

P.S. This guide has already helped more than 5,000 people. You're next! 🚀"];

const REGIONAL_EMAIL: &[&str] = &["Subject: {topic} - Everything You Need Dey Inside 📧

How you dey?

I hope say this email meet you well!

I wan reach you personally because I know say {topic} important for your success. After I don help thousands of people reach their goals, I package all the best strategies inside one guide.

**Wetin You Go Learn:**

• The number 1 mistake wey plenty people dey make (and how to avoid am)
• Simple 3-step plan wey go give you results sharp sharp
• Real life examples from people like you
• Things wey you fit do today today

I don see these strategies change people life. I want the same for you.

**You Ready?**

Click here make you collect your free guide: [Link]

If you get any question, just reply this email. I dey read all of them myself.

Na your time,
AfroCreate Team

P.S. This guide don help over 5,000 people achieve their goals. Na your turn! 🚀"];

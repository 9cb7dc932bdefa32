//! OpenAPI documentation assembly.

use crate::error::ErrorRes;
use crate::routes;
use crate::routes::guide::{DiagnoseReq, SymptomsRes};
use api_shared::HealthRes;
use matsya_core::accounting::{
    AccountingSummary, CategoryTotal, ExpenseView, IncomeView, NewExpense, NewIncome,
};
use matsya_core::catalog::fish::{FishCategory, FishSpecies, SpeciesWithCategory};
use matsya_core::catalog::ledger_categories::LedgerCategory;
use matsya_core::catalog::locations::{District, Division, LocationChain, Upazila};
use matsya_core::catalog::seasons::SeasonalAdvice;
use matsya_core::diagnosis::{DiagnosisResult, Disease, Severity, Symptom, SymptomCategory};
use matsya_core::market::{MarketPriceView, NewMarketPrice, SizeCategory};
use matsya_core::profile::{FarmerType, Profile, ProfileUpdate};
use matsya_core::stock::{NewStock, StockSize, StockView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        routes::locations::list_divisions,
        routes::locations::list_districts,
        routes::locations::list_upazilas,
        routes::fish::list_categories,
        routes::fish::list_species,
        routes::fish::get_species,
        routes::market::list_prices,
        routes::market::latest_prices,
        routes::market::report_price,
        routes::guide::list_symptoms,
        routes::guide::diagnose,
        routes::guide::list_seasons,
        routes::accounting::list_entries,
        routes::accounting::add_entry,
        routes::accounting::summary,
        routes::stock::list_stock,
        routes::stock::add_stock,
        routes::profile::get_profile,
        routes::profile::put_profile,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        Division,
        District,
        Upazila,
        LocationChain,
        FishCategory,
        FishSpecies,
        SpeciesWithCategory,
        MarketPriceView,
        NewMarketPrice,
        SizeCategory,
        Symptom,
        SymptomCategory,
        Disease,
        Severity,
        DiagnosisResult,
        DiagnoseReq,
        SymptomsRes,
        SeasonalAdvice,
        LedgerCategory,
        NewIncome,
        NewExpense,
        IncomeView,
        ExpenseView,
        CategoryTotal,
        AccountingSummary,
        NewStock,
        StockSize,
        StockView,
        FarmerType,
        Profile,
        ProfileUpdate,
    ))
)]
pub struct ApiDoc;
